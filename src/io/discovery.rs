//! Discovery of user-defined attributes (UDAs) from the task configuration.
//!
//! Every UDA becomes a candidate coefficient key `urgency.uda.<name>`.
//! Discovery is best-effort: any failure to run the command yields no keys.

use std::io::{self, ErrorKind, Read};
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::model::config::DiscoveryConfig;
use crate::model::key_for_uda;

/// A configuration line declaring a UDA looks like `uda.<name>.type`
pub const UDA_LINE_PREFIX: &str = "uda.";
pub const UDA_LINE_SUFFIX: &str = ".type";

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Something that can print the task configuration listing
pub trait ConfigSource {
    fn show_config(&self) -> io::Result<String>;
}

/// Runs an external command (by default `task show`) and captures its stdout
#[derive(Debug, Clone)]
pub struct TaskCommand {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl TaskCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        TaskCommand {
            program: program.into(),
            args,
            timeout,
        }
    }

    /// Build from settings. An empty command list yields a command that
    /// always fails, which discovery treats as "no UDAs".
    pub fn from_config(config: &DiscoveryConfig) -> Self {
        let mut parts = config.command.iter().cloned();
        let program = parts.next().unwrap_or_default();
        TaskCommand::new(
            program,
            parts.collect(),
            Duration::from_millis(config.timeout_ms),
        )
    }

    fn timed_out(&self) -> io::Error {
        io::Error::new(
            ErrorKind::TimedOut,
            format!("{} did not finish within {:?}", self.program, self.timeout),
        )
    }
}

impl ConfigSource for TaskCommand {
    fn show_config(&self) -> io::Result<String> {
        if self.program.is_empty() {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                "no discovery command configured",
            ));
        }

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        // Drain stdout concurrently so a chatty command can't block on a full pipe
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::other("child stdout was not captured"))?;
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut buf = Vec::new();
            let result = stdout.read_to_end(&mut buf).map(|_| buf);
            let _ = tx.send(result);
        });

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(self.timed_out());
            }
            thread::sleep(POLL_INTERVAL);
        };

        // A background process started by the command can hold stdout open
        // after the command itself exits; the deadline covers that too
        let output = match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
            Ok(result) => result?,
            Err(RecvTimeoutError::Timeout) => return Err(self.timed_out()),
            Err(RecvTimeoutError::Disconnected) => {
                return Err(io::Error::other("stdout reader stopped without a result"));
            }
        };

        if !status.success() {
            return Err(io::Error::other(format!(
                "{} exited with {}",
                self.program, status
            )));
        }
        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

/// Extract UDA names from configuration listing text, first occurrence
/// order, without duplicates
pub fn parse_uda_names(listing: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for line in listing.lines() {
        let Some(middle) = line
            .strip_prefix(UDA_LINE_PREFIX)
            .and_then(|rest| rest.strip_suffix(UDA_LINE_SUFFIX))
        else {
            continue;
        };
        let name = middle.split('.').next().unwrap_or_default();
        if name.is_empty() || names.iter().any(|n| n == name) {
            continue;
        }
        names.push(name.to_string());
    }
    names
}

/// Coefficient keys for every discovered UDA. Failures are logged and
/// produce an empty list.
pub fn discover_uda_keys(source: &dyn ConfigSource) -> Vec<String> {
    match source.show_config() {
        Ok(listing) => {
            let keys: Vec<String> = parse_uda_names(&listing)
                .iter()
                .map(|name| key_for_uda(name))
                .collect();
            tracing::debug!(count = keys.len(), "discovered uda coefficients");
            keys
        }
        Err(e) => {
            tracing::debug!("uda discovery skipped: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(io::Result<String>);

    impl ConfigSource for FixedSource {
        fn show_config(&self) -> io::Result<String> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(e) => Err(io::Error::new(e.kind(), e.to_string())),
            }
        }
    }

    const LISTING: &str = "\
Config Variable                    Value
uda.estimate.label                 Estimate
uda.estimate.type
uda.size.type
uda.size.values                    S,M,L
urgency.uda.size.coefficient       2
uda.estimate.type
uda..type
 uda.indented.type
";

    #[test]
    fn parses_names_between_delimiters() {
        assert_eq!(parse_uda_names(LISTING), vec!["estimate", "size"]);
    }

    #[test]
    fn name_is_first_segment() {
        assert_eq!(parse_uda_names("uda.a.b.type\n"), vec!["a"]);
    }

    #[test]
    fn discover_maps_to_coefficient_keys() {
        let source = FixedSource(Ok(LISTING.to_string()));
        assert_eq!(
            discover_uda_keys(&source),
            vec!["urgency.uda.estimate", "urgency.uda.size"]
        );
    }

    #[test]
    fn discover_swallows_failure() {
        let source = FixedSource(Err(io::Error::new(ErrorKind::NotFound, "no task")));
        assert!(discover_uda_keys(&source).is_empty());
    }

    #[test]
    fn missing_program_is_an_error() {
        let cmd = TaskCommand::new(
            "definitely-not-a-real-program-xyz",
            vec![],
            Duration::from_secs(1),
        );
        assert!(cmd.show_config().is_err());
        assert!(discover_uda_keys(&cmd).is_empty());
    }

    #[test]
    fn empty_command_is_an_error() {
        let cmd = TaskCommand::from_config(&DiscoveryConfig {
            command: vec![],
            timeout_ms: 100,
        });
        assert_eq!(cmd.show_config().unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout() {
        let cmd = TaskCommand::new(
            "sh",
            vec!["-c".into(), "echo uda.points.type; echo noise >&2".into()],
            Duration::from_secs(5),
        );
        assert_eq!(discover_uda_keys(&cmd), vec!["urgency.uda.points"]);
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_an_error() {
        let cmd = TaskCommand::new(
            "sh",
            vec!["-c".into(), "echo uda.points.type; exit 3".into()],
            Duration::from_secs(5),
        );
        assert!(cmd.show_config().is_err());
        assert!(discover_uda_keys(&cmd).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn slow_command_times_out() {
        let cmd = TaskCommand::new(
            "sleep",
            vec!["5".into()],
            Duration::from_millis(50),
        );
        let start = Instant::now();
        assert_eq!(cmd.show_config().unwrap_err().kind(), ErrorKind::TimedOut);
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn background_child_holding_stdout_times_out() {
        let cmd = TaskCommand::new(
            "sh",
            vec!["-c".into(), "sleep 4 & echo uda.a.type".into()],
            Duration::from_millis(200),
        );
        let start = Instant::now();
        assert_eq!(cmd.show_config().unwrap_err().kind(), ErrorKind::TimedOut);
        assert!(start.elapsed() < Duration::from_secs(2));
        assert!(discover_uda_keys(&cmd).is_empty());
    }
}
