use tracing::debug;

pub fn make_adder(n: i64) -> impl Fn(i64) -> i64 {
    move |x| x + n
}

/// Each call adds `step` to a running total owned by the closure.
pub fn make_incrementer(step: i64) -> impl FnMut() -> i64 {
    let mut total = 0;
    move || {
        total += step;
        total
    }
}

/// Calls `on_success` with a response body for an http(s) URL, otherwise
/// `on_failure` with a 400 status.
pub fn fetch<S, F>(url: &str, on_success: S, on_failure: F)
where
    S: FnOnce(String),
    F: FnOnce(u16),
{
    if url.starts_with("http://") || url.starts_with("https://") {
        on_success(format!("response from {}", url));
    } else {
        on_failure(400);
    }
}

/// Handlers stored now and run after the registering call has returned.
#[derive(Default)]
pub struct CompletionQueue {
    handlers: Vec<Box<dyn FnOnce() + Send>>,
}

impl CompletionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<F>(&mut self, handler: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs every queued handler in insertion order and returns how many ran.
    pub fn run_all(&mut self) -> usize {
        let handlers = std::mem::take(&mut self.handlers);
        let ran = handlers.len();
        for handler in handlers {
            handler();
        }
        debug!("Ran {} completion handlers", ran);
        ran
    }
}

pub fn perform_action<F>(action: F) -> &'static str
where
    F: FnOnce() -> bool,
{
    if action() {
        "Action was successful."
    } else {
        "Action failed."
    }
}
