//! Parser for catalog text.
//!
//! Format, one product per line: `name::color::size`
//!
//! ```text
//! Apple::green::small
//! Tree::green::medium
//! ```

use crate::error::{CatalogError, Result};
use crate::types::Product;
use std::io::ErrorKind;
use std::path::Path;

/// Load a catalog file from disk
pub fn load_products(path: &Path) -> Result<Vec<Product>> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;

    let source_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_products(&text, &source_name)
}

/// Parse catalog text into products, keeping line order.
///
/// `source_name` is only used in error messages.
pub fn parse_products(text: &str, source_name: &str) -> Result<Vec<Product>> {
    let mut products = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue;
        }

        let parse_error = |reason: &str| CatalogError::ParseError {
            source_name: source_name.to_string(),
            line: line_no,
            reason: reason.to_string(),
        };

        let mut parts = line_trimmed.split("::");

        let name = parts
            .next()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| parse_error("Missing name"))?;
        let color = parts.next().ok_or_else(|| parse_error("Missing color"))?;
        let size = parts.next().ok_or_else(|| parse_error("Missing size"))?;

        if parts.next().is_some() {
            return Err(parse_error("Too many fields"));
        }

        products.push(Product::new(name, color.parse()?, size.parse()?));
    }

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Size};
    use std::io::Write;

    #[test]
    fn test_parse_products() {
        let text = "Apple::green::small\n\nCar::Red::medium\n";
        let products = parse_products(text, "inline").unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0], Product::new("Apple", Color::Green, Size::Small));
        assert_eq!(products[1].color, Color::Red);
    }

    #[test]
    fn test_parse_missing_field() {
        let err = parse_products("Apple::green", "inline").unwrap_err();
        match err {
            CatalogError::ParseError { line, reason, .. } => {
                assert_eq!(line, 1);
                assert_eq!(reason, "Missing size");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_invalid_color() {
        let err = parse_products("Apple::purple::small", "inline").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { ref field, .. } if field == "color"));
    }

    #[test]
    fn test_parse_too_many_fields() {
        assert!(parse_products("Apple::green::small::extra", "inline").is_err());
    }

    #[test]
    fn test_load_products_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "House::blue::large").unwrap();
        writeln!(file, "Melon::green::large").unwrap();

        let products = load_products(file.path()).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "House");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_products(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound { .. }));
    }
}
