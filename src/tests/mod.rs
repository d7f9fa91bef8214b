mod pipeline_tests;

/// The page used throughout the pipeline tests
const SMALL_PAGE: &str = r#"<html>
<head><title>T</title></head>
<body>
<h1>Hi</h1>
<a href="/a">next</a>
</body>
</html>"#;
