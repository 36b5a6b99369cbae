use core::fmt::{Debug, Formatter};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

type SymbolIndex = u32;

/// Interned handle to the text of an atomic proposition. Comparisons are
/// index comparisons; the text itself lives in a process-wide table.
#[derive(Hash, PartialOrd, Ord, Eq, PartialEq, Clone, Copy)]
pub struct Symbol(SymbolIndex);

#[derive(Default)]
struct SymbolTable {
    text_to_index: HashMap<String, SymbolIndex>,
    index_to_text: Vec<String>,
}

impl SymbolTable {
    fn intern(&mut self, text: &str) -> SymbolIndex {
        if let Some(&index) = self.text_to_index.get(text) {
            index
        } else {
            let index = self.index_to_text.len() as SymbolIndex;
            self.text_to_index.insert(text.to_string(), index);
            self.index_to_text.push(text.to_string());
            index
        }
    }
}

static SYMBOL_TABLE: OnceLock<RwLock<SymbolTable>> = OnceLock::new();

fn table() -> &'static RwLock<SymbolTable> {
    SYMBOL_TABLE.get_or_init(Default::default)
}

impl Symbol {
    pub fn new(text: &str) -> Self {
        Self(table().write().expect("poisoned").intern(text))
    }
    pub fn text(self) -> String {
        table().read().expect("poisoned").index_to_text[self.0 as usize].clone()
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let map: &SymbolTable = &table().read().expect("poisoned");
        write!(f, "{}", map.index_to_text[self.0 as usize])
    }
}
