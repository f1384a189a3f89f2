//! Lockstep comparison of submission and reference streams

use crate::numeric::{differences, Tolerance};
use crate::tokens::{Token, Tokens};
use crate::{DiffConfig, DiffError, DiffKind, DiffRecord, Side};
use checkest_domain::{Case, Interval, OutcomeSink};
use serde::Serialize;
use std::io::BufRead;
use tracing::{debug, info, warn};

/// Diagnostics collected over one comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiffSummary {
    /// Failing diagnostics in stream order
    pub records: Vec<DiffRecord>,

    /// Non-failing whitespace diagnostics in stream order
    pub advisories: Vec<DiffRecord>,

    /// Line pairs compared
    pub lines: usize,

    /// Whitespace divergences seen, whether or not they were recorded
    pub whitespace_mismatches: usize,

    /// Whether a fatal difference stopped the comparison early
    pub halted: bool,
}

impl DiffSummary {
    /// Number of failing diagnostics
    pub fn differences(&self) -> usize {
        self.records.len()
    }

    /// Whether the streams matched structurally
    pub fn is_clean(&self) -> bool {
        self.records.is_empty()
    }
}

/// What to do after a token comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    NextLine,
    Halt,
}

/// Compares two streams line by line
///
/// Lines with the same number of tokens on both sides are compared token for
/// token, with numbers matched under the configured tolerance. Any other line
/// is an interval line: each numeric submission token is checked against the
/// next two reference tokens `L R`, and the resulting outcome goes to the
/// [`OutcomeSink`]. Non-numeric reference tokens on interval lines must match
/// the submission token verbatim.
///
/// On an interval line every numeric reference token opens an interval, so a
/// literal number there (a case count, say) has to be written as the
/// zero-width interval `x x` in the reference.
///
/// Tokens are compared as raw bytes; only numeric parsing and diagnostics
/// decode them as UTF-8.
pub struct Differ {
    config: DiffConfig,
}

impl Differ {
    /// Create a differ with the given configuration
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    /// Compare `submission` against `reference`
    ///
    /// Returns once both streams are exhausted or a fatal difference was
    /// found. Outcomes of all interval cases formed up to that point have been
    /// delivered to `sink`.
    ///
    /// # Errors
    ///
    /// Fails only when reading a stream fails; mismatches are reported in the
    /// returned summary.
    pub fn compare<S, R, O>(
        &self,
        mut submission: S,
        mut reference: R,
        sink: &mut O,
    ) -> Result<DiffSummary, DiffError>
    where
        S: BufRead,
        R: BufRead,
        O: OutcomeSink + ?Sized,
    {
        let mut run = Run {
            config: &self.config,
            tolerance: self.config.tolerance(),
            sink,
            summary: DiffSummary::default(),
        };
        let mut sub_buf = Vec::new();
        let mut ref_buf = Vec::new();

        loop {
            let line = run.summary.lines + 1;
            let sub_more = read_line(&mut submission, &mut sub_buf, Side::Submission)?;
            let ref_more = read_line(&mut reference, &mut ref_buf, Side::Reference)?;

            let ended = match (sub_more, ref_more) {
                (false, false) => break,
                (false, true) => Some(Side::Submission),
                (true, false) => Some(Side::Reference),
                (true, true) => None,
            };
            if let Some(ended) = ended {
                run.push(line, None, DiffKind::StreamLength { ended });
                run.summary.halted = true;
                break;
            }

            run.summary.lines = line;
            if run.compare_line(line, &sub_buf, &ref_buf) == Flow::Halt {
                run.summary.halted = true;
                break;
            }
        }

        info!(
            lines = run.summary.lines,
            differences = run.summary.differences(),
            advisories = run.summary.advisories.len(),
            whitespace = run.summary.whitespace_mismatches,
            halted = run.summary.halted,
            "Comparison finished"
        );

        Ok(run.summary)
    }
}

/// State of one comparison
struct Run<'a, O: ?Sized> {
    config: &'a DiffConfig,
    tolerance: Tolerance,
    sink: &'a mut O,
    summary: DiffSummary,
}

impl<O: OutcomeSink + ?Sized> Run<'_, O> {
    fn compare_line(&mut self, line: usize, submission: &[u8], reference: &[u8]) -> Flow {
        let sub_cursor = Tokens::new(submission);
        let ref_cursor = Tokens::new(reference);
        self.whitespace(line, 0, sub_cursor.leading(), ref_cursor.leading());

        let sub_tokens: Vec<Token<'_>> = sub_cursor.collect();
        let ref_tokens: Vec<Token<'_>> = ref_cursor.collect();

        if sub_tokens.len() == ref_tokens.len() {
            debug!(line, tokens = sub_tokens.len(), "Lockstep line");
            self.lockstep(line, &sub_tokens, &ref_tokens)
        } else {
            debug!(
                line,
                submission = sub_tokens.len(),
                reference = ref_tokens.len(),
                "Interval line"
            );
            self.intervals(line, &sub_tokens, &ref_tokens)
        }
    }

    fn lockstep(&mut self, line: usize, submission: &[Token<'_>], reference: &[Token<'_>]) -> Flow {
        for (idx, (sub, reference)) in submission.iter().zip(reference).enumerate() {
            let token = idx + 1;

            if sub.text != reference.text {
                let flow = self.compare_numbers(line, token, sub, reference);
                if flow != Flow::Continue {
                    return flow;
                }
            }

            self.whitespace(line, token, sub.trailing, reference.trailing);
        }

        Flow::Continue
    }

    fn compare_numbers(&mut self, line: usize, token: usize, sub: &Token<'_>, reference: &Token<'_>) -> Flow {
        let Some(submitted) = sub.number() else {
            return self.not_a_number(line, token, Side::Submission, sub);
        };
        let Some(expected) = reference.number() else {
            return self.not_a_number(line, token, Side::Reference, reference);
        };

        if self.tolerance.equal(submitted, expected) {
            return Flow::Continue;
        }

        let (absdiff, reldiff) = if submitted.is_finite() && expected.is_finite() {
            let (absdiff, reldiff) = differences(submitted, expected);
            (
                (absdiff > self.tolerance.absolute).then_some(absdiff),
                (reldiff > self.tolerance.relative).then_some(reldiff),
            )
        } else {
            (None, None)
        };

        self.push(
            line,
            Some(token),
            DiffKind::FloatDiffers {
                submission: submitted,
                reference: expected,
                absdiff,
                reldiff,
            },
        )
    }

    fn intervals(&mut self, line: usize, submission: &[Token<'_>], reference: &[Token<'_>]) -> Flow {
        let mut cursor = 0;

        for (idx, sub) in submission.iter().enumerate() {
            let token = idx + 1;
            let Some(first) = reference.get(cursor) else {
                return self.push(line, Some(token), DiffKind::ExcessToken);
            };

            let last = match first.number() {
                None => {
                    cursor += 1;
                    if sub.text != first.text {
                        self.push(
                            line,
                            Some(token),
                            DiffKind::TextDiffers {
                                submission: sub.display().into_owned(),
                                reference: first.display().into_owned(),
                            },
                        );
                    }
                    first
                }
                Some(lower) => {
                    let Some(observed) = sub.number() else {
                        return self.not_a_number(line, token, Side::Submission, sub);
                    };
                    let Some(second) = reference.get(cursor + 1) else {
                        return self.push(line, Some(token), DiffKind::UnpairedBound);
                    };
                    let Some(upper) = second.number() else {
                        return self.not_a_number(line, token, Side::Reference, second);
                    };
                    cursor += 2;

                    let interval = match Interval::new(lower, upper) {
                        Ok(interval) => interval,
                        Err(e) => {
                            return self.push(
                                line,
                                Some(token),
                                DiffKind::malformed(&first.display(), &second.display(), e),
                            );
                        }
                    };

                    let outcome = Case::new(interval, observed).outcome();
                    debug!(line, token, %interval, observed, ?outcome, "Case");
                    self.sink.record(outcome);
                    second
                }
            };

            self.whitespace(line, token, sub.trailing, last.trailing);
        }

        if cursor < reference.len() {
            return self.push(line, Some(submission.len() + 1), DiffKind::MissingToken);
        }

        Flow::Continue
    }

    fn not_a_number(&mut self, line: usize, token: usize, side: Side, offender: &Token<'_>) -> Flow {
        self.push(
            line,
            Some(token),
            DiffKind::NotANumber {
                side,
                text: offender.display().into_owned(),
            },
        )
    }

    fn whitespace(&mut self, line: usize, token: usize, submission: &[u8], reference: &[u8]) {
        if submission == reference {
            return;
        }

        self.summary.whitespace_mismatches += 1;
        if self.config.strict_whitespace {
            self.push(line, Some(token), DiffKind::Whitespace);
        } else {
            let record = DiffRecord::new(line, Some(token), DiffKind::Whitespace);
            debug!(%record, "Advisory");
            self.summary.advisories.push(record);
        }
    }

    fn push(&mut self, line: usize, token: Option<usize>, kind: DiffKind) -> Flow {
        let flow = if kind.halts_comparison() {
            Flow::Halt
        } else if kind.halts_line() {
            Flow::NextLine
        } else {
            Flow::Continue
        };

        let record = DiffRecord::new(line, token, kind);
        if flow == Flow::Halt {
            warn!(%record, "Fatal difference, stopping comparison");
        } else {
            debug!(%record, "Difference");
        }
        self.summary.records.push(record);

        flow
    }
}

fn read_line<B: BufRead>(stream: &mut B, buf: &mut Vec<u8>, side: Side) -> Result<bool, DiffError> {
    buf.clear();
    let read = stream
        .read_until(b'\n', buf)
        .map_err(|source| DiffError::Read { side, source })?;
    Ok(read > 0)
}
