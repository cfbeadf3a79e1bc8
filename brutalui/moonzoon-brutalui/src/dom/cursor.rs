use super::{body, DomError};
use std::cell::RefCell;
use std::rc::Rc;

pub const HIDDEN_CURSOR: &str = "none";

/// Bookkeeping shared by every suppression of one host.
///
/// The first acquisition saves the host's cursor and the last release puts
/// it back, so overlapping overlays never restore each other's `none`.
#[derive(Debug, Default)]
pub struct SuppressionLedger {
    depth: usize,
    saved: Option<String>,
}

impl SuppressionLedger {
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Something that owns an ambient cursor style.
pub trait CursorHost {
    fn cursor(&self) -> String;
    fn set_cursor(&self, value: &str);
    fn ledger(&self) -> &RefCell<SuppressionLedger>;
}

/// Hides the host's cursor until dropped.
pub struct CursorSuppression<H: CursorHost> {
    host: H,
}

impl<H: CursorHost> CursorSuppression<H> {
    pub fn acquire(host: H) -> Self {
        {
            let mut ledger = host.ledger().borrow_mut();
            if ledger.depth == 0 {
                ledger.saved = Some(host.cursor());
                host.set_cursor(HIDDEN_CURSOR);
            }
            ledger.depth += 1;
        }
        Self { host }
    }
}

impl<H: CursorHost> Drop for CursorSuppression<H> {
    fn drop(&mut self) {
        let mut ledger = self.host.ledger().borrow_mut();
        ledger.depth = ledger.depth.saturating_sub(1);
        if ledger.depth == 0 {
            if let Some(saved) = ledger.saved.take() {
                self.host.set_cursor(&saved);
            }
        }
    }
}

thread_local! {
    static BODY_LEDGER: Rc<RefCell<SuppressionLedger>> = Rc::default();
}

/// The `cursor` property of `document.body`'s inline style.
pub struct BodyCursor {
    body: web_sys::HtmlElement,
    ledger: Rc<RefCell<SuppressionLedger>>,
}

impl BodyCursor {
    pub fn new() -> Result<Self, DomError> {
        Ok(Self {
            body: body()?,
            ledger: BODY_LEDGER.with(Rc::clone),
        })
    }
}

impl CursorHost for BodyCursor {
    fn cursor(&self) -> String {
        self.body.style().get_property_value("cursor").unwrap_or_default()
    }

    fn set_cursor(&self, value: &str) {
        let style = self.body.style();
        let result = if value.is_empty() {
            style.remove_property("cursor").map(drop)
        } else {
            style.set_property("cursor", value)
        };
        if let Err(error) = result {
            zoon::eprintln!("Failed to set body cursor to '{}': {:?}", value, error);
        }
    }

    fn ledger(&self) -> &RefCell<SuppressionLedger> {
        &self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeHost {
        cursor: RefCell<String>,
        ledger: RefCell<SuppressionLedger>,
    }

    impl FakeHost {
        fn with_cursor(cursor: &str) -> Rc<Self> {
            let host = Self::default();
            *host.cursor.borrow_mut() = cursor.to_string();
            Rc::new(host)
        }
    }

    impl CursorHost for Rc<FakeHost> {
        fn cursor(&self) -> String {
            self.cursor.borrow().clone()
        }

        fn set_cursor(&self, value: &str) {
            *self.cursor.borrow_mut() = value.to_string();
        }

        fn ledger(&self) -> &RefCell<SuppressionLedger> {
            &self.ledger
        }
    }

    #[test]
    fn suppression_hides_and_restores_cursor() {
        let host = FakeHost::with_cursor("crosshair");
        let suppression = CursorSuppression::acquire(host.clone());
        assert_eq!(host.cursor(), HIDDEN_CURSOR);
        drop(suppression);
        assert_eq!(host.cursor(), "crosshair");
    }

    #[test]
    fn empty_cursor_is_restored_as_empty() {
        let host = FakeHost::with_cursor("");
        drop(CursorSuppression::acquire(host.clone()));
        assert_eq!(host.cursor(), "");
    }

    #[test]
    fn repeated_cycles_restore_the_original_value() {
        let host = FakeHost::with_cursor("wait");
        for _ in 0..5 {
            let suppression = CursorSuppression::acquire(host.clone());
            assert_eq!(host.cursor(), HIDDEN_CURSOR);
            drop(suppression);
            assert_eq!(host.cursor(), "wait");
        }
        assert_eq!(host.ledger().borrow().depth(), 0);
    }

    #[test]
    fn overlapping_suppressions_restore_after_the_last_release() {
        let host = FakeHost::with_cursor("pointer");
        let first = CursorSuppression::acquire(host.clone());
        let second = CursorSuppression::acquire(host.clone());
        drop(first);
        assert_eq!(host.cursor(), HIDDEN_CURSOR);
        drop(second);
        assert_eq!(host.cursor(), "pointer");
    }

    #[test]
    fn unwinding_releases_the_cursor() {
        let host = FakeHost::with_cursor("text");
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _suppression = CursorSuppression::acquire(host.clone());
            panic!("teardown failed");
        }));
        assert!(result.is_err());
        assert_eq!(host.cursor(), "text");
    }
}
