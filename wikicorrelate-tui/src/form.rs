use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use tokio::sync::mpsc;
use wikicorrelate_core::{CorrelateOptions, SearchResult, execute_correlation};

pub const NO_CORRELATION: &str = "No correlation found!";
pub const ERROR_PLACEHOLDER: &str = "Error!";

/// Outcome sent back from the search worker
pub type SearchMessage = Result<SearchResult, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Source,
    Destination,
    Hops,
    MsgLevel,
    Timeout,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Source,
        Field::Destination,
        Field::Hops,
        Field::MsgLevel,
        Field::Timeout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Source => "Source article",
            Field::Destination => "Destination article",
            Field::Hops => "Max hops",
            Field::MsgLevel => "Log level",
            Field::Timeout => "Timeout (s)",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Form state: five inputs, a result pane and at most one running search.
pub struct App {
    inputs: [String; 5],
    focus: usize,
    base_url: String,
    output: Vec<String>,
    status: String,
    cancel_flag: Option<Arc<AtomicBool>>,
    rx: Option<mpsc::UnboundedReceiver<SearchMessage>>,
    pub should_quit: bool,
}

impl App {
    pub fn new(defaults: &CorrelateOptions) -> Self {
        Self {
            inputs: [
                defaults.source.clone().unwrap_or_default(),
                defaults.destination.clone().unwrap_or_default(),
                defaults.max_hops.to_string(),
                defaults.msg_level.to_string(),
                defaults.timeout_secs.to_string(),
            ],
            focus: 0,
            base_url: defaults.base_url.clone(),
            output: Vec::new(),
            status: "Fill in both articles and press Enter.".to_string(),
            cancel_flag: None,
            rx: None,
            should_quit: false,
        }
    }

    pub fn focused(&self) -> Field {
        Field::ALL[self.focus]
    }

    pub fn input(&self, field: Field) -> &str {
        &self.inputs[field.index()]
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_running(&self) -> bool {
        self.rx.is_some()
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Field::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Field::ALL.len() - 1) % Field::ALL.len();
    }

    pub fn insert_char(&mut self, c: char) {
        let numeric = !matches!(self.focused(), Field::Source | Field::Destination);
        if numeric && !c.is_ascii_digit() {
            return;
        }
        self.inputs[self.focus].push(c);
    }

    pub fn backspace(&mut self) {
        self.inputs[self.focus].pop();
    }

    /// Read the form into correlation options.
    pub fn parse_options(&self) -> Result<CorrelateOptions, String> {
        let number = |field: Field| -> Result<u64, String> {
            self.input(field)
                .trim()
                .parse::<u64>()
                .map_err(|_| format!("{} must be a whole number", field.label()))
        };

        let max_hops = number(Field::Hops)? as usize;
        let msg_level = number(Field::MsgLevel)? as usize;
        let timeout_secs = number(Field::Timeout)?;

        Ok(CorrelateOptions::new(
            Some(self.input(Field::Source).to_string()),
            Some(self.input(Field::Destination).to_string()),
            max_hops,
            msg_level,
            timeout_secs,
        )
        .with_base_url(self.base_url.clone()))
    }

    /// Kick off a search on a worker thread. Ignored while one is running.
    pub fn start_search(&mut self) {
        if self.is_running() {
            return;
        }

        let options = match self.parse_options() {
            Ok(options) => options,
            Err(message) => {
                self.output = vec![ERROR_PLACEHOLDER.to_string()];
                self.status = message;
                return;
            }
        };

        let (tx, rx) = mpsc::unbounded_channel();
        let flag = Arc::new(AtomicBool::new(false));
        let worker_flag = flag.clone();

        thread::spawn(move || {
            let outcome = execute_correlation(&options, Some(worker_flag)).map_err(|e| e.to_string());
            // Receiver is gone if the form was closed first
            let _ = tx.send(outcome);
        });

        self.cancel_flag = Some(flag);
        self.rx = Some(rx);
        self.output.clear();
        self.status = "Searching... this may use a lot of data. Esc cancels.".to_string();
    }

    pub fn cancel_search(&mut self) {
        if let Some(flag) = &self.cancel_flag {
            flag.store(true, Ordering::Relaxed);
            self.status = "Cancelling...".to_string();
        }
    }

    /// Pick up a finished search, if any, without blocking.
    pub fn poll_search(&mut self) {
        let message = match self.rx.as_mut().map(|rx| rx.try_recv()) {
            Some(Ok(message)) => message,
            Some(Err(mpsc::error::TryRecvError::Disconnected)) => {
                Err("search worker stopped unexpectedly".to_string())
            }
            Some(Err(mpsc::error::TryRecvError::Empty)) | None => return,
        };
        self.finish_search(message);
    }

    pub fn finish_search(&mut self, message: SearchMessage) {
        self.rx = None;
        self.cancel_flag = None;

        match message {
            Ok(result) => {
                self.status = if result.cancelled {
                    "Search cancelled.".to_string()
                } else {
                    format!("Done. {} child article nodes traversed.", result.expansions)
                };
                self.output = result_lines(&result);
            }
            Err(message) => {
                self.output = vec![ERROR_PLACEHOLDER.to_string()];
                self.status = message;
            }
        }
    }
}

/// One node per line, or the no-correlation message.
pub fn result_lines(result: &SearchResult) -> Vec<String> {
    if result.is_found() {
        result.path.clone()
    } else {
        vec![NO_CORRELATION.to_string()]
    }
}
