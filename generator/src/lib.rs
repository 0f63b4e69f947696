use icon_enum_types::EnumerationDocument;
use itertools::Itertools;

/// Renders an [`EnumerationDocument`] as a C++ scoped enumeration
///
/// ```text
/// enum class NAME {
///     A = 0xe901,
///     B = 0xe902,
/// }
/// ```
pub struct EnumGenerator<'a> {
    doc: &'a EnumerationDocument,
}

impl<'a> EnumGenerator<'a> {
    pub fn new(doc: &'a EnumerationDocument) -> Self {
        Self { doc }
    }

    fn gen_header(&self) -> String {
        format!("enum class {} {{\n", self.doc.name())
    }

    fn gen_entries(&self) -> String {
        self.doc
            .rules()
            .iter()
            .map(|rule| format!("{rule}\n"))
            .join("")
    }

    fn gen_closer(&self) -> &'static str {
        "}\n"
    }

    pub fn out(&self) -> String {
        let mut out = self.gen_header();
        out.push_str(&self.gen_entries());
        out.push_str(self.gen_closer());
        out
    }
}
