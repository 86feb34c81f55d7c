//! Human-readable tree rendering

use crate::error::TlvResult;
use crate::object::TlvObject;

/// Formatting options for the tree view
///
/// Passed explicitly to [`render`]; there is no module-wide formatting
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Spaces added per nesting level
    pub indent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Render one TLV object as an indented, newline-joined tree
///
/// Primitive objects render as a single line: indentation, tag in hex, the
/// decoded length in brackets, and the value in hex. Constructed objects
/// render a header line without the value, then every child at `depth + 1`.
/// Hex output is lowercase.
pub fn render(object: &TlvObject<'_>, depth: usize, config: &RenderConfig) -> TlvResult<String> {
    let pad = " ".repeat(config.indent * depth);

    if object.is_primitive() {
        return Ok(format!(
            "{}{} - [{}] - {}",
            pad,
            object.tag(),
            object.length(),
            hex::encode(object.value())
        ));
    }

    let mut lines = vec![format!("{}{} - [{}]", pad, object.tag(), object.length())];
    for child in object.children()? {
        lines.push(render(&child, depth + 1, config)?);
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::head;

    const FCI: &str = "6f20840e315041592e5359532e4444463031a50e8801015f2d046672656e9f110101";

    #[test]
    fn test_render_primitive() {
        let data = hex::decode("9f110101").unwrap();
        let object = head(&data).unwrap();
        let rendered = render(&object, 0, &RenderConfig::default()).unwrap();
        assert_eq!(rendered, "9f11 - [1] - 01");
    }

    #[test]
    fn test_render_primitive_at_depth() {
        let data = hex::decode("9f110101").unwrap();
        let object = head(&data).unwrap();
        let rendered = render(&object, 2, &RenderConfig::default()).unwrap();
        assert_eq!(rendered, "    9f11 - [1] - 01");
    }

    #[test]
    fn test_render_constructed_tree() {
        let data = hex::decode(FCI).unwrap();
        let object = head(&data).unwrap();
        let rendered = render(&object, 0, &RenderConfig::default()).unwrap();
        let expected = "\
6f - [32]
  84 - [14] - 315041592e5359532e4444463031
  a5 - [14]
    88 - [1] - 01
    5f2d - [4] - 6672656e
    9f11 - [1] - 01";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_custom_indent() {
        let data = hex::decode("a50388010a").unwrap();
        let object = head(&data).unwrap();
        let config = RenderConfig { indent: 4 };
        let rendered = render(&object, 0, &config).unwrap();
        assert_eq!(rendered, "a5 - [3]\n    88 - [1] - 0a");
    }

    #[test]
    fn test_render_zero_length_value() {
        let data = hex::decode("8400").unwrap();
        let object = head(&data).unwrap();
        let rendered = render(&object, 0, &RenderConfig::default()).unwrap();
        assert_eq!(rendered, "84 - [0] - ");
    }
}
