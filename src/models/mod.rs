pub mod categorias;
pub mod record;
pub mod tabela;

pub use categorias::*;
pub use record::*;
pub use tabela::*;
