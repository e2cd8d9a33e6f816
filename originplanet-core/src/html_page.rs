use std::{fs::File, io::Write, path::Path};

use crate::page_error::PageError;

pub const DEFAULT_PAGE_FILENAME: &'static str = "main.html";

pub const HTML_DOCUMENT: &'static str = "<!DOCTYPE html>
<html lang=\"de\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>HK</title>
</head>
<body>
    <h1>Welcome</h1>
</body>
</html>
";

pub fn write_html_page<W: Write>(mut sink: W) -> std::io::Result<()> {
    sink.write_all(HTML_DOCUMENT.as_bytes())?;
    sink.flush()
}

/// Creates (or truncates) the file at the given path and writes the page
/// to it.
pub fn create_html_file<P: AsRef<Path>>(path: P) -> Result<(), PageError> {
    let path = path.as_ref();
    let wrap = |source| PageError::CreateFile {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(wrap)?;
    write_html_page(file).map_err(wrap)
}
