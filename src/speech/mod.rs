//! Text-to-speech through whatever synthesizer the OS provides, spawned
//! fire-and-forget. A missing synthesizer is reported to the user and is
//! never fatal.

use std::process::{
    Command,
    Stdio,
};

use crate::core::VerbarioError;

/// The detail header reads `infinitive (meaning)`; only the infinitive
/// segment is spoken.
pub fn spoken_fragment(header: &str) -> &str {
    header.split_whitespace().next().unwrap_or(header)
}

pub fn speak(text: &str) -> Result<(), VerbarioError> {
    spawn_synthesizer(text)
}

#[cfg(target_os = "macos")]
fn spawn_synthesizer(text: &str) -> Result<(), VerbarioError> {
    spawn_candidates(text, &[("say", &[])])
}

#[cfg(all(unix, not(target_os = "macos")))]
fn spawn_synthesizer(text: &str) -> Result<(), VerbarioError> {
    spawn_candidates(
        text,
        &[("spd-say", &["-l", "es"]), ("espeak-ng", &["-v", "es"]), ("espeak", &["-v", "es"])],
    )
}

#[cfg(windows)]
fn spawn_synthesizer(text: &str) -> Result<(), VerbarioError> {
    let script = format!(
        "Add-Type -AssemblyName System.Speech; \
         (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak('{}')",
        text.replace('\'', "''")
    );
    match Command::new("powershell")
        .args(["-NoProfile", "-Command", &script])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(VerbarioError::SpeechUnavailable)
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(unix)]
fn spawn_candidates(text: &str, candidates: &[(&str, &[&str])]) -> Result<(), VerbarioError> {
    for (binary, args) in candidates {
        match Command::new(binary)
            .args(*args)
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(_) => return Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Err(VerbarioError::SpeechUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spoken_fragment_is_the_infinitive_segment() {
        assert_eq!(spoken_fragment("hablar (to speak)"), "hablar");
        assert_eq!(spoken_fragment("ser (N/A)"), "ser");
        assert_eq!(spoken_fragment("ir"), "ir");
    }
}
