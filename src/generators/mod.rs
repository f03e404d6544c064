mod java;
mod php;
mod python;
mod typescript;

pub use java::JavaGenerator;
pub use php::PhpGenerator;
pub use python::PythonGenerator;
pub use typescript::TypeScriptGenerator;
