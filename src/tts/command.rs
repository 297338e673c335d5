//! Speech through a system command

use crate::core::{Error, Result};
use crate::tts::TtsProvider;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

/// Supported command-line synthesizers, in order of preference
const CANDIDATES: [(&str, CommandKind); 3] = [
    ("espeak-ng", CommandKind::Espeak),
    ("espeak", CommandKind::Espeak),
    ("say", CommandKind::Say),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Espeak,
    Say,
}

/// Spawns a synthesizer process per utterance
pub struct CommandTtsProvider {
    program: PathBuf,
    kind: CommandKind,
    name: String,
    child: Option<Child>,
}

impl CommandTtsProvider {
    /// First supported synthesizer found on `PATH`
    pub fn detect() -> Option<Self> {
        let path = std::env::var_os("PATH")?;
        let dirs: Vec<PathBuf> = std::env::split_paths(&path).collect();

        CANDIDATES.iter().find_map(|(binary, kind)| {
            dirs.iter()
                .map(|dir| dir.join(binary))
                .find(|candidate| is_executable(candidate))
                .map(|program| Self {
                    program,
                    kind: *kind,
                    name: binary.to_string(),
                    child: None,
                })
        })
    }

    fn args(&self, text: &str, language_code: &str, rate: f32) -> Vec<String> {
        let wpm = words_per_minute(rate).to_string();
        match self.kind {
            CommandKind::Espeak => vec![
                "-v".to_string(),
                espeak_voice(language_code),
                "-s".to_string(),
                wpm,
                "--".to_string(),
                text.to_string(),
            ],
            CommandKind::Say => vec!["-r".to_string(), wpm, "--".to_string(), text.to_string()],
        }
    }
}

impl TtsProvider for CommandTtsProvider {
    fn speak(&mut self, text: &str, language_code: &str, rate: f32) -> Result<()> {
        self.stop();

        let child = Command::new(&self.program)
            .args(self.args(text, language_code, rate))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Speech(format!("Failed to start {}: {}", self.name, e)))?;

        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Ok(None) = child.try_wait() {
                let _ = child.kill();
            }
            let _ = child.wait();
        }
    }

    fn is_speaking(&mut self) -> bool {
        match self.child.as_mut().map(|c| c.try_wait()) {
            Some(Ok(None)) => true,
            Some(_) => {
                self.child = None;
                false
            }
            None => false,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for CommandTtsProvider {
    fn drop(&mut self) {
        self.stop();
    }
}

fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        path.metadata()
            .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    {
        path.is_file()
    }
}

/// Map 0.0..=1.0 onto 80..=300 words per minute
fn words_per_minute(rate: f32) -> u32 {
    (80.0 + rate.clamp(0.0, 1.0) * 220.0).round() as u32
}

/// espeak voice for an `ll-CC` locale ("en-US" -> "en-us", "it-IT" -> "it")
fn espeak_voice(language_code: &str) -> String {
    let lower = language_code.to_lowercase();
    match lower.as_str() {
        "en-us" | "en-gb" => lower,
        _ => lower.split('-').next().unwrap_or("en").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_per_minute() {
        assert_eq!(words_per_minute(0.0), 80);
        assert_eq!(words_per_minute(0.5), 190);
        assert_eq!(words_per_minute(4.0), 300);
    }

    #[test]
    fn test_espeak_voice() {
        assert_eq!(espeak_voice("it-IT"), "it");
        assert_eq!(espeak_voice("de-DE"), "de");
        assert_eq!(espeak_voice("en-US"), "en-us");
    }

    #[test]
    fn test_espeak_args() {
        let provider = CommandTtsProvider {
            program: PathBuf::from("/usr/bin/espeak-ng"),
            kind: CommandKind::Espeak,
            name: "espeak-ng".to_string(),
            child: None,
        };
        assert_eq!(
            provider.args("Sedia", "it-IT", 0.5),
            vec!["-v", "it", "-s", "190", "--", "Sedia"]
        );
    }
}
