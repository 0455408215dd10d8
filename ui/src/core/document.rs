//! Root document attributes (`lang`, `dir`) kept in sync with the active language.

use std::cell::RefCell;
use std::rc::Rc;

use crate::i18n::{Direction, Language};

/// Receives the `lang`/`dir` pair whenever the language changes.
pub trait DocumentRoot {
    fn apply(&self, language: Language, direction: Direction);
}

/// Records every applied pair. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingDocument {
    applied: Rc<RefCell<Vec<(Language, Direction)>>>,
}

impl RecordingDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> Vec<(Language, Direction)> {
        self.applied.borrow().clone()
    }

    pub fn last(&self) -> Option<(Language, Direction)> {
        self.applied.borrow().last().copied()
    }
}

impl DocumentRoot for RecordingDocument {
    fn apply(&self, language: Language, direction: Direction) {
        self.applied.borrow_mut().push((language, direction));
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::BrowserDocument;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::DocumentRoot;
    use crate::i18n::{Direction, Language};

    /// Writes straight onto `document.documentElement`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserDocument;

    impl DocumentRoot for BrowserDocument {
        fn apply(&self, language: Language, direction: Direction) {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                tracing::warn!("[i18n] no document element; lang/dir not applied");
                return;
            };
            for (name, value) in [("lang", language.code()), ("dir", direction.as_str())] {
                if let Err(err) = root.set_attribute(name, value) {
                    tracing::warn!("[i18n] setting {name} failed: {err:?}");
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::EvalDocument;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use dioxus::prelude::{document, spawn};

    use super::DocumentRoot;
    use crate::i18n::{Direction, Language};

    /// Runs a one-line script in the webview. Must be called with a Dioxus
    /// runtime active (render or event handler).
    #[derive(Debug, Clone, Copy, Default)]
    pub struct EvalDocument;

    impl DocumentRoot for EvalDocument {
        fn apply(&self, language: Language, direction: Direction) {
            let eval = document::eval(&attribute_script(language, direction));
            spawn(async move {
                report(eval.join::<serde_json::Value>().await);
            });
        }
    }

    /// Logs a failed attribute script. Returns whether the script ran.
    pub(super) fn report(result: Result<serde_json::Value, document::EvalError>) -> bool {
        match result {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!("[i18n] setting lang/dir failed: {err}");
                false
            }
        }
    }

    pub(super) fn attribute_script(language: Language, direction: Direction) -> String {
        format!(
            "document.documentElement.lang = \"{}\"; document.documentElement.dir = \"{}\";",
            language.code(),
            direction.as_str()
        )
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn script_sets_both_attributes() {
            let script = attribute_script(Language::Arabic, Direction::Rtl);
            assert!(script.contains("lang = \"ar\""));
            assert!(script.contains("dir = \"rtl\""));
        }

        #[test]
        fn eval_outcome_is_reported() {
            assert!(report(Ok(serde_json::Value::Null)));
            assert!(!report(Err(document::EvalError::Unsupported)));
            assert!(!report(Err(document::EvalError::InvalidJs("x".into()))));
        }
    }
}
