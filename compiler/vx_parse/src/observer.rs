//! Rule enter/exit hook.
//!
//! Every grammar routine reports entering and leaving through a
//! [`ParseObserver`]. The default [`NoopObserver`] compiles away; the
//! [`TracingObserver`] turns the calls into `tracing` events so a parse can
//! be followed with `RUST_LOG=vx_parse=trace`.

use tracing::trace;
use vx_ir::GrammarTag;

/// Callbacks fired around every grammar rule.
pub trait ParseObserver {
    /// Rule `rule` starts at byte offset `pos`.
    fn enter(&mut self, rule: GrammarTag, pos: u32) {
        let _ = (rule, pos);
    }

    /// Rule `rule` finished; `ok` is `false` if it failed.
    fn exit(&mut self, rule: GrammarTag, ok: bool) {
        let _ = (rule, ok);
    }
}

impl<O: ParseObserver + ?Sized> ParseObserver for &mut O {
    fn enter(&mut self, rule: GrammarTag, pos: u32) {
        (**self).enter(rule, pos);
    }

    fn exit(&mut self, rule: GrammarTag, ok: bool) {
        (**self).exit(rule, ok);
    }
}

/// Observer that ignores everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl ParseObserver for NoopObserver {}

/// Observer that emits a `trace!` event per rule boundary.
#[derive(Clone, Debug, Default)]
pub struct TracingObserver {
    depth: usize,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParseObserver for TracingObserver {
    fn enter(&mut self, rule: GrammarTag, pos: u32) {
        trace!(depth = self.depth, rule = %rule, pos, "enter");
        self.depth += 1;
    }

    fn exit(&mut self, rule: GrammarTag, ok: bool) {
        self.depth = self.depth.saturating_sub(1);
        trace!(depth = self.depth, rule = %rule, ok, "exit");
    }
}
