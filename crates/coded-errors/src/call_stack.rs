//! Call-stack capture at error construction time.
//!
//! Only instruction pointers are recorded when an error is built; symbols
//! are resolved lazily when the stack is rendered, which keeps the cost of
//! constructing an error low for errors that are never printed in detail.
use std::ffi::c_void;
use std::fmt;
use std::path::{Path, PathBuf};

/// Initial capacity of the frame buffer, grown on demand for deeper stacks.
const INITIAL_DEPTH: usize = 20;

const UNKNOWN: &str = "<unknown>";

/// The active call frames at the point an error was constructed.
///
/// `{:?}` renders every frame as the function on one line and `file:line`
/// on the next; `{:-?}` renders function names only. Any other format spec
/// renders nothing.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CallStack {
    pcs: Vec<usize>,
}

/// A resolved call frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub function: String,
    pub file: Option<PathBuf>,
    pub line: Option<u32>,
}

impl Frame {
    fn unresolved() -> Self {
        Self {
            function: UNKNOWN.to_string(),
            file: None,
            line: None,
        }
    }
}

impl CallStack {
    /// Captures the frames of the caller of the function that calls
    /// `capture`, dropping `skip` frames above `capture` itself.
    ///
    /// Constructors pass `skip = 1` so that their own frame is left out and
    /// the first recorded frame is the code that asked for the error.
    #[inline(never)]
    pub(crate) fn capture(skip: usize) -> Self {
        let anchor: fn(usize) -> Self = Self::capture;
        let anchor = anchor as usize;

        let mut walked: Vec<(usize, usize)> = Vec::with_capacity(INITIAL_DEPTH);
        backtrace::trace(|frame| {
            walked.push((frame.ip() as usize, frame.symbol_address() as usize));
            true
        });

        let own_frame = walked
            .iter()
            .position(|&(_, sym)| sym == anchor)
            .or_else(|| walked.iter().position(|&(ip, _)| resolves_to_capture(ip)));

        let pcs = match own_frame {
            Some(idx) => walked
                .into_iter()
                .skip(idx + 1 + skip)
                .map(|(ip, _)| ip)
                .collect(),
            None => walked.into_iter().map(|(ip, _)| ip).collect(),
        };

        Self { pcs }
    }

    /// Number of captured frames, before inlined frames are expanded.
    pub fn len(&self) -> usize {
        self.pcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pcs.is_empty()
    }

    /// Resolve the captured frames, innermost first.
    ///
    /// An address covering inlined calls yields one frame per inlined
    /// function.
    pub fn frames(&self) -> Vec<Frame> {
        let mut frames = Vec::with_capacity(self.pcs.len());
        for &pc in &self.pcs {
            let resolved_before = frames.len();
            backtrace::resolve(pc as *mut c_void, |symbol| {
                frames.push(Frame {
                    function: symbol
                        .name()
                        .map(|name| format!("{name:#}"))
                        .unwrap_or_else(|| UNKNOWN.to_string()),
                    file: symbol.filename().map(Path::to_path_buf),
                    line: symbol.lineno(),
                });
            });
            if frames.len() == resolved_before {
                frames.push(Frame::unresolved());
            }
        }
        frames
    }
}

fn resolves_to_capture(ip: usize) -> bool {
    let mut hit = false;
    backtrace::resolve(ip as *mut c_void, |symbol| {
        if let Some(name) = symbol.name() {
            hit |= format!("{name:#}").ends_with("CallStack::capture");
        }
    });
    hit
}

impl fmt::Debug for CallStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compact = f.sign_minus();
        for (i, frame) in self.frames().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            if compact {
                write!(f, "\t{}", frame.function)?;
            } else {
                let file = frame
                    .file
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| UNKNOWN.to_string());
                write!(
                    f,
                    "\t{}\n\t\t{}:{}",
                    frame.function,
                    file,
                    frame.line.unwrap_or(0)
                )?;
            }
        }
        Ok(())
    }
}

silent_fmt!(CallStack: Display, LowerHex, UpperHex, Octal, Binary, LowerExp, UpperExp);
