use std::collections::BTreeSet;

///
/// EnhancedClassRegistry
///
/// Answers whether a class has already been transformed into a
/// persistence-capable wrapper by the runtime.
///

pub trait EnhancedClassRegistry {
    fn is_enhanced(&self, class_name: &str) -> bool;
}

impl EnhancedClassRegistry for BTreeSet<String> {
    fn is_enhanced(&self, class_name: &str) -> bool {
        self.contains(class_name)
    }
}
