//! Drives a compiled model in a child process over a line protocol.
//!
//! The child reads commands on stdin and answers one line per command on
//! stdout: `step` and `set <port> <value>` are acknowledged with `ok`;
//! `get <port>` is answered with the port value in decimal. Any other
//! reply is a protocol violation and aborts the run.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use randsim_harness::{ModelError, SimModel};

/// A [`SimModel`] backed by an external model process.
pub struct SubprocessModel {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl SubprocessModel {
    /// Spawns the model process from a whitespace-separated command line.
    pub fn spawn(command_line: &str) -> Result<Self, ModelError> {
        let (program, args) = split_command(command_line)?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| ModelError::Protocol("model stdin unavailable".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| ModelError::Protocol("model stdout unavailable".to_string()))?;

        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }

    /// Sends one command line and reads the single reply line.
    fn exchange(&mut self, command: &str) -> Result<String, ModelError> {
        writeln!(self.stdin, "{command}")?;
        self.stdin.flush()?;

        let mut reply = String::new();
        let n = self.stdout.read_line(&mut reply)?;
        if n == 0 {
            return Err(ModelError::Protocol(format!(
                "model exited while awaiting reply to '{command}'"
            )));
        }
        Ok(reply.trim_end().to_string())
    }

    fn expect_ok(&mut self, command: &str) -> Result<(), ModelError> {
        let reply = self.exchange(command)?;
        if reply == "ok" {
            Ok(())
        } else {
            Err(ModelError::Protocol(format!(
                "expected 'ok' to '{command}', got '{reply}'"
            )))
        }
    }
}

impl SimModel for SubprocessModel {
    fn step(&mut self) -> Result<(), ModelError> {
        self.expect_ok("step")
    }

    fn set(&mut self, port: &str, value: u64) -> Result<(), ModelError> {
        self.expect_ok(&format!("set {port} {value}"))
    }

    fn get(&mut self, port: &str) -> Result<u64, ModelError> {
        let reply = self.exchange(&format!("get {port}"))?;
        parse_value(&reply, port)
    }
}

impl Drop for SubprocessModel {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Splits a model command line into program and arguments.
fn split_command(command_line: &str) -> Result<(&str, Vec<&str>), ModelError> {
    let mut parts = command_line.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| ModelError::Protocol("empty model command".to_string()))?;
    Ok((program, parts.collect()))
}

/// Parses a `get` reply as a decimal port value.
fn parse_value(reply: &str, port: &str) -> Result<u64, ModelError> {
    reply.trim().parse().map_err(|_| {
        ModelError::Protocol(format!("non-numeric reply for port '{port}': '{reply}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_command_program_only() {
        let (program, args) = split_command("./model").unwrap();
        assert_eq!(program, "./model");
        assert!(args.is_empty());
    }

    #[test]
    fn split_command_with_args() {
        let (program, args) = split_command("python3 model.py --fast").unwrap();
        assert_eq!(program, "python3");
        assert_eq!(args, vec!["model.py", "--fast"]);
    }

    #[test]
    fn split_command_rejects_empty() {
        assert!(split_command("   ").is_err());
    }

    #[test]
    fn parse_value_decimal() {
        assert_eq!(parse_value("42", "q").unwrap(), 42);
        assert_eq!(parse_value(" 0 \n", "q").unwrap(), 0);
        assert_eq!(parse_value("18446744073709551615", "q").unwrap(), u64::MAX);
    }

    #[test]
    fn parse_value_rejects_garbage() {
        let err = parse_value("0xff", "q").unwrap_err();
        assert!(err.to_string().contains("non-numeric"));
        assert!(parse_value("", "q").is_err());
        assert!(parse_value("-1", "q").is_err());
    }

    /// Builds a model around a shell loop that acks every command and
    /// answers `get` with a fixed value.
    fn scripted_model(get_reply: &str) -> SubprocessModel {
        let script = format!(
            r#"while read cmd rest; do
                case "$cmd" in
                    get) echo {get_reply} ;;
                    *) echo ok ;;
                esac
            done"#
        );
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(script)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .unwrap();
        let stdin = child.stdin.take().unwrap();
        let stdout = child.stdout.take().unwrap();
        SubprocessModel {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        }
    }

    #[test]
    fn drives_a_scripted_child_process() {
        let mut model = scripted_model("5");
        model.step().unwrap();
        model.set("data__in", 3).unwrap();
        assert_eq!(model.get("data__out").unwrap(), 5);
    }

    #[test]
    fn non_numeric_get_reply_is_a_protocol_error() {
        let mut model = scripted_model("nonsense");
        let err = model.get("q").unwrap_err();
        assert!(matches!(err, ModelError::Protocol(_)));
    }

    #[test]
    fn echoing_child_violates_protocol() {
        // `cat` echoes the command back instead of acking it.
        let mut model = SubprocessModel::spawn("cat").unwrap();
        let err = model.step().unwrap_err();
        assert!(err.to_string().contains("expected 'ok'"));
    }

    #[test]
    fn exited_child_reported() {
        let mut model = SubprocessModel::spawn("true").unwrap();
        let err = model.step().unwrap_err();
        assert!(matches!(err, ModelError::Protocol(_) | ModelError::Io(_)));
    }
}
