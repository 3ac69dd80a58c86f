//! Single `property:value` declarations as stored in a [`crate::StyleMap`].

use crate::error::StyleError;

/// Pseudo-element a declaration was tagged with by the style-sheet parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pseudo {
    Before,
    After,
}

impl Pseudo {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "before" => Some(Self::Before),
            "after" => Some(Self::After),
            _ => None,
        }
    }
}

/// A declaration split into its parts. `before|content:"x"` carries [`Pseudo::Before`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub pseudo: Option<Pseudo>,
    pub property: String,
    pub value: String,
}

impl Declaration {
    /// Split a raw declaration on its first `:`.
    ///
    /// # Errors
    /// [`StyleError::MalformedDeclaration`] when there is no `:`, and
    /// [`StyleError::UnknownPseudo`] for a `tag|` prefix other than `before`/`after`.
    pub fn parse(raw: &str) -> Result<Self, StyleError> {
        let Some((head, value)) = raw.split_once(':') else {
            return Err(StyleError::MalformedDeclaration(raw.to_owned()));
        };
        let (pseudo, property) = match head.split_once('|') {
            Some((tag, property)) => {
                let pseudo =
                    Pseudo::from_tag(tag).ok_or_else(|| StyleError::UnknownPseudo(tag.to_owned()))?;
                (Some(pseudo), property)
            }
            None => (None, head),
        };
        Ok(Self {
            pseudo,
            property: property.trim().to_ascii_lowercase(),
            value: value.trim().trim_end_matches(';').trim_end().to_owned(),
        })
    }

    /// The value with one pair of matching quotes removed, for `content`.
    pub fn unquoted_value(&self) -> &str {
        let value = self.value.as_str();
        ['"', '\'']
            .into_iter()
            .find_map(|quote| value.strip_prefix(quote)?.strip_suffix(quote))
            .unwrap_or(value)
    }
}

/// `border-bottom-style` keywords.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    #[default]
    None,
    Solid,
    Dotted,
    Dashed,
    Double,
}

impl BorderStyle {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "solid" => Some(Self::Solid),
            "dotted" => Some(Self::Dotted),
            "dashed" => Some(Self::Dashed),
            "double" => Some(Self::Double),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_colon() {
        let declaration = Declaration::parse("content: \"a:b\";");
        assert_eq!(
            declaration,
            Ok(Declaration {
                pseudo: None,
                property: "content".to_owned(),
                value: "\"a:b\"".to_owned(),
            })
        );
    }

    #[test]
    fn pseudo_prefix_is_recognised() {
        let Ok(declaration) = Declaration::parse("before|content:'•'") else {
            panic!("declaration should parse");
        };
        assert_eq!(declaration.pseudo, Some(Pseudo::Before));
        assert_eq!(declaration.property, "content");
        assert_eq!(declaration.unquoted_value(), "•");
    }

    #[test]
    fn missing_colon_is_malformed() {
        assert_eq!(
            Declaration::parse("margin 1px"),
            Err(StyleError::MalformedDeclaration("margin 1px".to_owned()))
        );
    }

    #[test]
    fn unknown_pseudo_is_rejected() {
        assert_eq!(
            Declaration::parse("marker|content:x"),
            Err(StyleError::UnknownPseudo("marker".to_owned()))
        );
    }

    #[test]
    fn unquoted_value_needs_matching_quotes() {
        let Ok(declaration) = Declaration::parse("content:\"x'") else {
            panic!("declaration should parse");
        };
        assert_eq!(declaration.unquoted_value(), "\"x'");
    }

    #[test]
    fn border_keywords() {
        assert_eq!(BorderStyle::from_keyword(" Dotted"), Some(BorderStyle::Dotted));
        assert_eq!(BorderStyle::from_keyword("groove"), None);
    }
}
