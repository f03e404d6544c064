use crate::language::Language;

/// Everything goes into one `<Base>.java`, so all classes are package-private.
pub struct JavaGenerator;

impl Language for JavaGenerator {
    fn lang_id(&self) -> &'static str {
        "java"
    }

    fn file_name(&self, base_name: &str) -> String {
        format!("{}.java", base_name)
    }

    fn template(&self) -> &'static str {
        include_str!("java.gx")
    }

    fn namespace_line(&self, namespace: &str) -> Option<String> {
        Some(format!("package {};", namespace))
    }
}
