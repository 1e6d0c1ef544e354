use std::{
	io::{self, Write},
	sync::{Arc, Mutex},
};

/// Destination of rendered progress output, shared by all indicators of one reporter.
pub type Output = Arc<Mutex<Box<dyn Write + Send>>>;

pub(crate) fn stderr_output() -> Output {
	Arc::new(Mutex::new(Box::new(io::stderr())))
}

pub(crate) fn to_output<W: Write + Send + 'static>(writer: W) -> Output {
	Arc::new(Mutex::new(Box::new(writer)))
}

/// Writes to the output. Progress display is best effort: write errors are ignored.
pub(crate) fn write_output(output: &Output, text: &str) {
	if let Ok(mut writer) = output.lock() {
		let _ = writer.write_all(text.as_bytes());
		let _ = writer.flush();
	}
}

/// An in-memory writer whose clones share one buffer. Useful to capture progress output.
#[derive(Clone, Default)]
pub struct SharedBuffer {
	inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
	/// Everything written so far, lossily decoded as UTF-8.
	#[must_use]
	pub fn contents(&self) -> String {
		let bytes = self.inner.lock().map(|b| b.clone()).unwrap_or_default();
		String::from_utf8_lossy(&bytes).into_owned()
	}
}

impl Write for SharedBuffer {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let mut inner = self
			.inner
			.lock()
			.map_err(|_| io::Error::other("progress buffer lock poisoned"))?;
		inner.extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shared_buffer_clones_share_contents() {
		let buffer = SharedBuffer::default();
		let output = to_output(buffer.clone());
		write_output(&output, "hello ");
		write_output(&output, "world");
		assert_eq!(buffer.contents(), "hello world");
	}
}
