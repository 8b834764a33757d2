use html_escape::{decode_html_entities, encode_double_quoted_attribute_to_string};

use crate::attributes::{AttributeFilter, Attributes};

/// Append-only HTML output buffer.
///
/// Writes into a `String`, so nothing here can fail.
#[derive(Debug, Default)]
pub struct HtmlWriter {
    buf: String,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes markup as-is.
    pub fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Writes `s` with `&`, `<`, `>` and `"` escaped.
    pub fn write_escaped(&mut self, s: &str) {
        encode_double_quoted_attribute_to_string(s, &mut self.buf);
    }

    /// Writes source text: backslash escapes and character references are
    /// resolved first, then the result is escaped.
    ///
    /// `\&amp;` stays the literal five characters `&amp;`; only unescaped
    /// runs go through entity decoding.
    pub fn write_text(&mut self, s: &str) {
        let bytes = s.as_bytes();
        let mut run_start = 0;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'\\' && bytes.get(i + 1).is_some_and(u8::is_ascii_punctuation) {
                self.write_decoded(&s[run_start..i]);
                // ASCII punctuation is a single byte and a char boundary.
                self.write_escaped(&s[i + 1..i + 2]);
                i += 2;
                run_start = i;
                continue;
            }
            i += 1;
        }
        self.write_decoded(&s[run_start..]);
    }

    fn write_decoded(&mut self, s: &str) {
        if !s.is_empty() {
            self.write_escaped(&decode_html_entities(s));
        }
    }

    /// Writes ` name="value"` for every attribute `filter` allows, in
    /// insertion order. Disallowed names are skipped without a trace.
    pub fn write_attributes(&mut self, attrs: &Attributes, filter: &AttributeFilter) {
        for (name, value) in attrs.iter().filter(|(name, _)| filter.allows(name)) {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.write_escaped(value);
            self.buf.push('"');
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::GLOBAL_ATTRIBUTE_FILTER;
    use rstest::rstest;

    #[rstest]
    #[case::plain("H2O", "H2O")]
    #[case::markup("<tag>content</tag>", "&lt;tag&gt;content&lt;/tag&gt;")]
    #[case::quote(r#"say "hi""#, "say &quot;hi&quot;")]
    #[case::apostrophe_untouched("it's", "it's")]
    #[case::named_entity("&amp;", "&amp;")]
    #[case::hex_entity("&#x1f7af;", "🞯")]
    #[case::decimal_space("a&#32;b", "a b")]
    #[case::escaped_tilde(r"H\~2", "H~2")]
    #[case::escaped_entity(r"\&amp;", "&amp;amp;")]
    #[case::backslash_before_letter(r"a\b", r"a\b")]
    #[case::trailing_backslash(r"a\", r"a\")]
    fn write_text(#[case] input: &str, #[case] expected: &str) {
        let mut w = HtmlWriter::new();
        w.write_text(input);
        assert_eq!(w.as_str(), expected);
    }

    #[test]
    fn write_escaped_leaves_entities_alone() {
        let mut w = HtmlWriter::new();
        w.write_escaped("&#32;");
        assert_eq!(w.into_string(), "&amp;#32;");
    }

    #[test]
    fn attributes_are_filtered_and_ordered() {
        let attrs: Attributes = [
            ("id", "water"),
            ("onclick", "alert(1)"),
            ("data-formula", "H2O"),
            ("class", "a\"b"),
        ]
        .into_iter()
        .collect();
        let mut w = HtmlWriter::new();
        w.write_attributes(&attrs, &GLOBAL_ATTRIBUTE_FILTER);
        assert_eq!(
            w.into_string(),
            r#" id="water" data-formula="H2O" class="a&quot;b""#
        );
    }

    #[test]
    fn injected_attribute_names_are_dropped() {
        let attrs: Attributes = [(r#"data-x" onclick="alert(1)"#, "v"), ("data-ok", "1")]
            .into_iter()
            .collect();
        let mut w = HtmlWriter::new();
        w.write_attributes(&attrs, &GLOBAL_ATTRIBUTE_FILTER);
        assert_eq!(w.into_string(), r#" data-ok="1""#);
    }
}
