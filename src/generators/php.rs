use crate::language::Language;

pub struct PhpGenerator;

impl Language for PhpGenerator {
    fn lang_id(&self) -> &'static str {
        "php"
    }

    fn file_name(&self, base_name: &str) -> String {
        format!("{}.php", base_name)
    }

    fn template(&self) -> &'static str {
        include_str!("php.gx")
    }

    fn namespace_line(&self, namespace: &str) -> Option<String> {
        Some(format!("namespace {};", namespace))
    }
}
