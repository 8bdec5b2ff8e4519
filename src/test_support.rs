use std::{
  io,
  sync::{Arc, Mutex},
};

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
  pub fn contents(&self) -> String {
    let bytes = self.0.lock().expect("lock log buffer");
    String::from_utf8_lossy(&bytes).into_owned()
  }
}

impl io::Write for LogBuffer {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().expect("lock log buffer").extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl<'a> MakeWriter<'a> for LogBuffer {
  type Writer = LogBuffer;

  fn make_writer(&'a self) -> Self::Writer {
    self.clone()
  }
}

/// Routes events on the current thread into a buffer until the guard drops.
pub fn capture_logs() -> (LogBuffer, DefaultGuard) {
  let buffer = LogBuffer::default();
  let subscriber = tracing_subscriber::fmt()
    .with_writer(buffer.clone())
    .with_ansi(false)
    .with_max_level(tracing::Level::DEBUG)
    .finish();

  let guard = tracing::subscriber::set_default(subscriber);
  (buffer, guard)
}
