// src/util.rs
use crate::slugify::generate_slug;

/// Strategy seam for slug derivation, so embedding applications can swap the
/// algorithm out (tests, migrations) without touching call sites.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        generate_slug(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_generator_uses_crate_algorithm() {
        let generator: &dyn SlugGenerator = &DefaultSlugGenerator;
        assert_eq!(generator.slugify("Hello---World"), "hello-world");
        assert_eq!(generator.slugify(""), "event-slug");
    }
}
