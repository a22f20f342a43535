use crate::{expander::Expander, flipper::Flipper, logger::Logger, rotator::Rotator, typewriter::Typewriter, uppercaser::Uppercaser};
use pipeline::TransformBoxed;
use std::sync::Arc;
use thiserror::Error;

/// A stage name that doesn't correspond to any built-in transform.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown stage {0:?}")]
pub struct UnknownStage(pub String);

/// Looks up a built-in transform by its invocation name.
///
/// Every call returns a fresh instance: the same name appearing more than
/// once in an invocation (e.g. `uppercaser uppercaser`) yields two
/// independent stages, each with its own queue and worker, never a shared
/// one.
pub fn lookup(name: &str) -> Result<Arc<dyn TransformBoxed>, UnknownStage> {
    let transform: Arc<dyn TransformBoxed> = match name {
        "uppercaser" => Arc::new(Uppercaser),
        "rotator" => Arc::new(Rotator),
        "flipper" => Arc::new(Flipper),
        "expander" => Arc::new(Expander),
        "logger" => Arc::new(Logger),
        "typewriter" => Arc::new(Typewriter),
        other => return Err(UnknownStage(other.to_string())),
    };
    Ok(transform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_built_in_name_resolves() {
        for name in ["uppercaser", "rotator", "flipper", "expander", "logger", "typewriter"] {
            assert!(lookup(name).is_ok(), "{name} should resolve to a transform");
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(lookup("frobnicator").unwrap_err(), UnknownStage("frobnicator".to_string()));
    }

    #[tokio::test]
    async fn repeated_lookups_are_independent_instances() {
        use pipeline::TransformBoxed;
        let a = lookup("uppercaser").unwrap();
        let b = lookup("uppercaser").unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        let _ = TransformBoxed::name(&*a);
    }
}
