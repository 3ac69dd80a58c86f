//! Chunking and engine behaviour of the translation bridge.

use core::time::Duration;
use std::cell::RefCell;
use std::rc::Rc;
use tactile_translate::{
    CHUNK_CHARS, ProcessEngine, TranslationBridge, TranslationEngine as _, TranslationError,
    TranslatorCommand, WorkerEngine, split_chunks,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Bridge over an identity engine that records every chunk it sees.
fn recording_bridge() -> (TranslationBridge, Rc<RefCell<Vec<String>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let bridge = TranslationBridge::new(move |chunk: &str| -> Result<String, TranslationError> {
        sink.borrow_mut().push(chunk.to_owned());
        Ok(chunk.to_owned())
    });
    (bridge, seen)
}

#[test]
fn long_text_is_split_into_sixty_char_chunks() -> anyhow::Result<()> {
    init_logger();
    let (mut bridge, seen) = recording_bridge();
    let text: String = "abcdefghij".repeat(20);
    let out = bridge.translate(&text)?;
    assert_eq!(out, text);
    let lengths: Vec<usize> = seen.borrow().iter().map(String::len).collect();
    assert_eq!(lengths, vec![60, 60, 60, 20]);
    assert_eq!(bridge.chunks_sent(), 4);
    Ok(())
}

#[test]
fn boundary_ignores_words() -> anyhow::Result<()> {
    let (mut bridge, seen) = recording_bridge();
    let text = format!("{} wordacross", "a".repeat(CHUNK_CHARS - 5));
    bridge.translate(&text)?;
    let chunks = seen.borrow();
    assert_eq!(chunks.len(), 2);
    assert!(chunks[0].ends_with(" word"));
    assert_eq!(chunks[1], "across");
    Ok(())
}

#[test]
fn outputs_are_concatenated_in_order() -> anyhow::Result<()> {
    let mut calls = 0usize;
    let mut bridge = TranslationBridge::new(move |_chunk: &str| -> Result<String, TranslationError> {
        calls += 1;
        Ok(calls.to_string())
    });
    assert_eq!(bridge.translate(&"x".repeat(119))?, "12");
    assert_eq!(bridge.translate("y")?, "3");
    Ok(())
}

#[test]
fn empty_text_never_reaches_the_engine() -> anyhow::Result<()> {
    let (mut bridge, seen) = recording_bridge();
    assert_eq!(bridge.translate("")?, "");
    assert!(seen.borrow().is_empty());
    assert_eq!(bridge.chunks_sent(), 0);
    Ok(())
}

#[test]
fn first_failing_chunk_aborts() {
    let mut calls = 0usize;
    let mut bridge = TranslationBridge::new(move |chunk: &str| -> Result<String, TranslationError> {
        calls += 1;
        if calls == 2 {
            Err(TranslationError::Engine("table missing".to_owned()))
        } else {
            Ok(chunk.to_owned())
        }
    });
    let err = bridge.translate(&"z".repeat(150));
    assert!(matches!(err, Err(TranslationError::Engine(ref msg)) if msg == "table missing"));
    assert_eq!(bridge.chunks_sent(), 1);
}

#[cfg(unix)]
fn shell(script: &str) -> TranslatorCommand {
    TranslatorCommand::new("sh").arg("-c").arg(script)
}

#[cfg(unix)]
#[test]
fn process_engine_trims_two_trailing_chars() -> anyhow::Result<()> {
    init_logger();
    let engine = ProcessEngine::new(shell("cat; printf 'XY'"), Duration::from_secs(10))?;
    let mut bridge = TranslationBridge::new(engine);
    assert_eq!(bridge.translate("⠓⠑⠇⠇⠕")?, "⠓⠑⠇⠇⠕");
    Ok(())
}

#[cfg(unix)]
#[test]
fn process_engine_runs_once_per_chunk() -> anyhow::Result<()> {
    let engine = ProcessEngine::new(shell("cat >/dev/null; printf 'ok..'"), Duration::from_secs(10))?;
    let mut bridge = TranslationBridge::new(engine);
    assert_eq!(bridge.translate(&"q".repeat(130))?, "okokok");
    Ok(())
}

#[cfg(unix)]
#[test]
fn process_engine_reports_exit_status() -> anyhow::Result<()> {
    let engine = ProcessEngine::new(shell("echo 'no table' >&2; exit 3"), Duration::from_secs(10))?;
    let mut bridge = TranslationBridge::new(engine);
    match bridge.translate("hello") {
        Err(TranslationError::ExitStatus { code, stderr }) => {
            assert_eq!(code, Some(3));
            assert!(stderr.contains("no table"));
        }
        other => anyhow::bail!("unexpected result {other:?}"),
    }
    Ok(())
}

#[cfg(unix)]
#[test]
fn process_engine_times_out() -> anyhow::Result<()> {
    let limit = Duration::from_millis(100);
    let engine = ProcessEngine::new(shell("sleep 5"), limit)?;
    let mut bridge = TranslationBridge::new(engine);
    let err = bridge.translate("hello");
    assert!(matches!(err, Err(TranslationError::TimedOut(after)) if after == limit));
    Ok(())
}

#[test]
fn missing_program_is_a_spawn_error() -> anyhow::Result<()> {
    let engine = ProcessEngine::new(
        TranslatorCommand::new("tactile-no-such-translator"),
        Duration::from_secs(1),
    )?;
    let mut bridge = TranslationBridge::new(engine);
    let err = bridge.translate("hello");
    assert!(matches!(err, Err(TranslationError::Spawn { ref program, .. }) if program == "tactile-no-such-translator"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn worker_serves_every_chunk_from_one_process() -> anyhow::Result<()> {
    init_logger();
    let script = "count=0; while read -r line; do count=$((count+1)); echo \"$count\"; done";
    let mut engine = WorkerEngine::new(shell(script), Duration::from_secs(10))?;
    assert_eq!(engine.worker_pid(), None);
    let first = split_chunks(&"w".repeat(130))
        .map(|chunk| engine.translate_chunk(chunk))
        .collect::<Result<String, _>>()?;
    assert_eq!(first, "123");
    assert_eq!(engine.spawned(), 1);
    assert!(engine.worker_pid().is_some());

    let mut bridge = TranslationBridge::new(engine);
    assert_eq!(bridge.translate("more")?, "4");
    Ok(())
}

#[cfg(unix)]
#[test]
fn worker_echoes_line_without_terminator() -> anyhow::Result<()> {
    let engine = WorkerEngine::new(shell("cat"), Duration::from_secs(10))?;
    let mut bridge = TranslationBridge::new(engine);
    assert_eq!(bridge.translate("⠁⠃\n⠉")?, "⠁⠃ ⠉");
    Ok(())
}

#[cfg(unix)]
#[test]
fn worker_restarts_after_it_exits() -> anyhow::Result<()> {
    let mut engine = WorkerEngine::new(shell("read -r line; echo once"), Duration::from_secs(10))?;
    assert_eq!(engine.translate_chunk("a")?, "once");
    assert!(engine.translate_chunk("b").is_err());
    assert_eq!(engine.worker_pid(), None);
    assert_eq!(engine.translate_chunk("c")?, "once");
    assert_eq!(engine.spawned(), 2);
    Ok(())
}
