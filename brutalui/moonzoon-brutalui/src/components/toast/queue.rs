use crate::tokens::*;
use indexmap::IndexMap;

pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 5000;
/// Older toasts are evicted once this many are visible.
pub const DEFAULT_TOAST_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToastKind {
    #[default]
    Default,
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    /// Border, title and progress bar color.
    pub fn accent_color(self) -> &'static str {
        match self {
            ToastKind::Default => COLOR_PRIMARY,
            ToastKind::Success => COLOR_SUCCESS,
            ToastKind::Error => COLOR_ERROR,
            ToastKind::Info => COLOR_INFO,
            ToastKind::Warning => COLOR_WARNING,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

/// What the caller asks to show; the queue assigns the id and timeout.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastSpec {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
    pub timeout_ms: Option<u32>,
}

impl ToastSpec {
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: None,
            timeout_ms: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, title)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
    pub timeout_ms: u32,
}

/// Outcome of [`ToastQueue::push`].
#[derive(Clone, Debug, PartialEq)]
pub struct Pushed {
    pub toast: Toast,
    pub evicted: Vec<ToastId>,
}

/// Visible toasts in arrival order.
#[derive(Clone, Debug)]
pub struct ToastQueue {
    next_id: u64,
    toasts: IndexMap<ToastId, Toast>,
    default_timeout_ms: u32,
    limit: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TIMEOUT_MS)
    }
}

impl ToastQueue {
    pub fn new(default_timeout_ms: u32) -> Self {
        Self {
            next_id: 0,
            toasts: IndexMap::new(),
            default_timeout_ms,
            limit: DEFAULT_TOAST_LIMIT,
        }
    }

    /// A limit of zero is treated as one.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn push(&mut self, spec: ToastSpec) -> Pushed {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        let toast = Toast {
            id,
            kind: spec.kind,
            title: spec.title,
            description: spec.description,
            timeout_ms: spec.timeout_ms.unwrap_or(self.default_timeout_ms),
        };
        self.toasts.insert(id, toast.clone());

        let overflow = self.toasts.len().saturating_sub(self.limit);
        let evicted = self
            .toasts
            .drain(..overflow)
            .map(|(id, _)| id)
            .collect();
        Pushed { toast, evicted }
    }

    pub fn dismiss(&mut self, id: ToastId) -> Option<Toast> {
        self.toasts.shift_remove(&id)
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.values()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Countdown of one toast. Time only passes while not paused.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToastProgress {
    total_ms: u32,
    elapsed_ms: u32,
    paused: bool,
}

impl ToastProgress {
    pub fn new(total_ms: u32) -> Self {
        Self {
            total_ms,
            elapsed_ms: 0,
            paused: false,
        }
    }

    pub fn advance(&mut self, delta_ms: u32) {
        if !self.paused {
            self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms).min(self.total_ms);
        }
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed_ms >= self.total_ms
    }

    /// 100 when fresh, 0 when expired.
    pub fn remaining_percent(&self) -> f64 {
        if self.total_ms == 0 {
            return 0.0;
        }
        f64::from(self.total_ms - self.elapsed_ms) * 100.0 / f64::from(self.total_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids_and_default_timeout() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastSpec::success("Saved"));
        let second = queue.push(ToastSpec::info("Update").timeout_ms(1200));

        assert!(first.toast.id < second.toast.id);
        assert_eq!(first.toast.timeout_ms, DEFAULT_TOAST_TIMEOUT_MS);
        assert_eq!(second.toast.timeout_ms, 1200);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn dismiss_removes_only_the_named_toast() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastSpec::success("a")).toast.id;
        let b = queue.push(ToastSpec::error("b")).toast.id;
        let c = queue.push(ToastSpec::warning("c")).toast.id;

        assert_eq!(queue.dismiss(b).map(|toast| toast.title), Some("b".to_owned()));
        assert_eq!(queue.dismiss(b), None);
        let order: Vec<_> = queue.iter().map(|toast| toast.id).collect();
        assert_eq!(order, vec![a, c]);
    }

    #[test]
    fn pushing_past_the_limit_evicts_the_oldest() {
        let mut queue = ToastQueue::default().with_limit(2);
        let a = queue.push(ToastSpec::info("a")).toast.id;
        let b = queue.push(ToastSpec::info("b")).toast.id;
        let pushed = queue.push(ToastSpec::info("c"));

        assert_eq!(pushed.evicted, vec![a]);
        assert!(queue.get(a).is_none());
        assert!(queue.get(b).is_some());
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn each_kind_has_its_accent() {
        assert_eq!(ToastKind::default().accent_color(), COLOR_PRIMARY);
        assert_eq!(ToastKind::Success.accent_color(), COLOR_SUCCESS);
        assert_eq!(ToastKind::Error.accent_color(), COLOR_ERROR);
        assert_eq!(ToastKind::Info.accent_color(), COLOR_INFO);
        assert_eq!(ToastKind::Warning.accent_color(), COLOR_WARNING);
    }

    #[test]
    fn progress_runs_down_linearly_and_stops_while_paused() {
        let mut progress = ToastProgress::new(5000);
        assert_eq!(progress.remaining_percent(), 100.0);

        progress.advance(1250);
        assert_eq!(progress.remaining_percent(), 75.0);

        progress.set_paused(true);
        progress.advance(1000);
        assert_eq!(progress.remaining_percent(), 75.0);

        progress.set_paused(false);
        progress.advance(10_000);
        assert!(progress.is_expired());
        assert_eq!(progress.remaining_percent(), 0.0);
    }

    #[test]
    fn zero_timeout_is_expired_immediately() {
        let progress = ToastProgress::new(0);
        assert!(progress.is_expired());
        assert_eq!(progress.remaining_percent(), 0.0);
    }
}
