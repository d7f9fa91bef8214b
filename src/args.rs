use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tooldash")]
#[command(about = "SEO reports, playlist downloads, document merging and video conversion")]
#[command(version)]
pub struct Args {
    /// JSON configuration file; missing fields take their defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyse a web page and write a PDF report
    Seo {
        /// Page to analyse
        url: String,

        /// Directory for the report (overrides the config file)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Download a playlist as audio files
    Playlist {
        url: String,

        output_dir: PathBuf,
    },

    /// Convert Word documents to PDF and merge them into one file
    MergeDocs {
        /// .doc/.docx files, merged in the given order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[arg(short, long, default_value = "merged.pdf")]
        output: PathBuf,
    },

    /// Convert a video file to MP4
    ConvertVideo {
        input: PathBuf,

        /// Output file (default: the input with an .mp4 extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seo() {
        let args = Args::parse_from(["tooldash", "seo", "https://example.com", "-o", "reports"]);
        match args.command {
            Command::Seo { url, output_dir } => {
                assert_eq!(url, "https://example.com");
                assert_eq!(output_dir, Some(PathBuf::from("reports")));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(args.config.is_none());
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let args = Args::parse_from(["tooldash", "merge-docs", "a.docx", "b.doc", "--config", "c.json"]);
        assert_eq!(args.config, Some(PathBuf::from("c.json")));
        match args.command {
            Command::MergeDocs { files, output } => {
                assert_eq!(files, vec![PathBuf::from("a.docx"), PathBuf::from("b.doc")]);
                assert_eq!(output, PathBuf::from("merged.pdf"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_merge_docs_requires_files() {
        assert!(Args::try_parse_from(["tooldash", "merge-docs"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
