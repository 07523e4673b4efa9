// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

#[cfg(test)]
use pretty_assertions::assert_eq;
use sqlrender::{
    error::Error,
    options::RenderOptions,
    renderer::{Renderer, TextRenderer},
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    Layer,
    layer::{Context as LayerContext, SubscriberExt},
};

fn render_with(options: &RenderOptions, emit: impl FnOnce(&mut TextRenderer<Vec<u8>>)) -> String {
    let mut renderer = TextRenderer::with_options(Vec::new(), options);
    emit(&mut renderer);
    let bytes = renderer.finish().expect("writing to memory never fails");
    String::from_utf8(bytes).expect("rendered output is valid UTF-8")
}

fn render(emit: impl FnOnce(&mut TextRenderer<Vec<u8>>)) -> String {
    render_with(&RenderOptions::default(), emit)
}

/// A sink that accepts a fixed number of writes,
/// and fails every one after that.
struct FailingSink {
    written: Vec<u8>,
    writes_left: usize,
    attempts: usize,
}

impl FailingSink {
    const fn new(writes_left: usize) -> Self {
        Self {
            written: Vec::new(),
            writes_left,
            attempts: 0,
        }
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.attempts += 1;
        if self.writes_left == 0 {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                format!("sink closed at write {}", self.attempts),
            ));
        }
        self.writes_left -= 1;
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_call_with_parenthesized_argument() {
    let output = render(|r| {
        r.identifier("SELECT");
        r.symbol("(");
        r.identifier("x");
        r.symbol(")");
    });
    assert_eq!(output, "SELECT(x)");
}

#[test]
fn test_comma_separated_list() {
    let output = render(|r| {
        r.identifier("a");
        r.symbol(",");
        r.identifier("b");
    });
    assert_eq!(output, "a, b");
}

#[test]
fn test_keyword_then_identifier() {
    let output = render(|r| {
        r.keyword("SELECT");
        r.identifier("x");
    });
    assert_eq!(output, "SELECT x");
}

#[test]
fn test_cast_colons() {
    assert_eq!(
        render(|r| {
            r.symbol("::");
            r.identifier("int");
        }),
        "::int"
    );
    assert_eq!(
        render(|r| {
            r.identifier("x");
            r.symbol("::");
            r.identifier("int");
        }),
        "x::int"
    );
    assert_eq!(
        render(|r| {
            r.symbol("(");
            r.identifier("x");
            r.symbol(")");
            r.symbol("::");
            r.identifier("int");
        }),
        "(x)::int"
    );
}

#[test]
fn test_qualified_name() {
    let output = render(|r| {
        r.identifier("x");
        r.symbol(".");
        r.identifier("y");
    });
    assert_eq!(output, "x.y");
}

#[test]
fn test_operators_and_constants() {
    let output = render(|r| {
        r.keyword("WHERE");
        r.identifier("a");
        r.symbol("=");
        r.constant("1");
        r.keyword("AND");
        r.identifier("b");
        r.symbol("<>");
        r.constant("'x y'");
    });
    assert_eq!(output, "WHERE a = 1 AND b <> 'x y'");
}

#[test]
fn test_nested_parentheses_after_comma() {
    let output = render(|r| {
        r.identifier("f");
        r.symbol("(");
        r.identifier("a");
        r.symbol(",");
        r.symbol("(");
        r.identifier("b");
        r.symbol(")");
        r.symbol(")");
    });
    assert_eq!(output, "f(a, (b))");
}

#[test]
fn test_first_token_gets_no_leading_space() {
    let output = render(|r| {
        r.symbol("*");
        r.keyword("FROM");
    });
    assert_eq!(output, "* FROM");
}

#[test]
fn test_refuse_space_suppresses_exactly_one_gap() {
    let output = render(|r| {
        r.keyword("SELECT");
        r.refuse_space();
        r.identifier("x");
        r.identifier("y");
    });
    assert_eq!(output, "SELECTx y");
}

#[test]
fn test_refuse_space_writes_nothing() {
    let output = render(|r| {
        r.refuse_space();
        r.refuse_space();
    });
    assert_eq!(output, "");
}

#[test]
fn test_explicit_space() {
    let output = render(|r| {
        r.identifier("a");
        r.space();
        r.symbol("(");
        r.identifier("b");
        r.symbol(")");
    });
    assert_eq!(output, "a (b)");
}

#[test]
fn test_consecutive_newlines_collapse() {
    let output = render(|r| {
        r.keyword("SELECT");
        r.new_line();
        r.new_line();
        r.new_line();
        r.identifier("a");
        r.new_line();
        r.new_line();
    });
    assert_eq!(output, "SELECT\na\n");
}

#[test]
fn test_token_after_newline_gets_no_leading_space() {
    let output = render(|r| {
        r.identifier("a");
        r.symbol(",");
        r.new_line();
        r.identifier("b");
    });
    assert_eq!(output, "a,\nb");
}

#[test]
fn test_indent_round_trip() {
    let output = render(|r| {
        r.indent();
        r.new_line();
        r.identifier("a");
    });
    assert_eq!(output, "\n  a");

    let output = render(|r| {
        r.indent();
        r.new_line();
        r.identifier("a");
        r.unindent();
        r.new_line();
        r.identifier("b");
    });
    assert_eq!(output, "\n  a\nb");
}

#[test]
fn test_select_statement_layout() {
    let output = render(|r| {
        r.keyword("SELECT");
        r.indent();
        r.new_line();
        r.identifier("a");
        r.symbol(",");
        r.new_line();
        r.identifier("b");
        r.unindent();
        r.new_line();
        r.keyword("FROM");
        r.identifier("t");
        r.new_line();
    });
    assert_eq!(output, "SELECT\n  a,\n  b\nFROM t\n");
}

#[test]
fn test_indentation_is_written_once_per_line() {
    let output = render(|r| {
        r.indent();
        r.indent();
        r.keyword("SELECT");
        r.identifier("a");
        r.indent();
        r.identifier("b");
        r.new_line();
        r.identifier("c");
    });
    assert_eq!(output, "    SELECT a b\n      c");
}

#[test]
fn test_custom_indentation_unit() {
    let options = RenderOptions {
        indentation: "\t".to_string(),
    };
    let output = render_with(&options, |r| {
        r.indent();
        r.indent();
        r.new_line();
        r.identifier("x");
    });
    assert_eq!(output, "\n\t\tx");

    let output = render_with(&RenderOptions::with_indent_width(4), |r| {
        r.indent();
        r.identifier("x");
    });
    assert_eq!(output, "    x");
}

#[test]
fn test_negative_depth_writes_no_indentation() {
    let mut renderer = TextRenderer::new(Vec::new());
    renderer.unindent();
    renderer.identifier("a");
    assert_eq!(renderer.indent_level(), -1);
    renderer.indent();
    renderer.new_line();
    renderer.identifier("b");
    assert_eq!(renderer.indent_level(), 0);
    let output = renderer.finish().expect("writing to memory never fails");
    assert_eq!(String::from_utf8(output).unwrap(), "a\nb");
}

#[test]
fn test_fault_freezes_output() {
    let mut sink = FailingSink::new(2);
    let mut renderer = TextRenderer::new(&mut sink);
    // "SELECT", " ", then "x" fails
    renderer.keyword("SELECT");
    renderer.identifier("x");
    assert!(renderer.fault().is_some());

    renderer.indent();
    renderer.new_line();
    renderer.space();
    renderer.symbol(",");
    renderer.keyword("FROM");
    renderer.unindent();
    renderer.unindent();
    assert_eq!(renderer.indent_level(), 0);

    let fault = renderer.fault().map(ToString::to_string);
    assert_eq!(fault.as_deref(), Some("sink closed at write 3"));
    assert!(matches!(renderer.finish(), Err(Error::SinkWrite(_))));

    assert_eq!(sink.attempts, 3);
    assert_eq!(String::from_utf8(sink.written).unwrap(), "SELECT ");
}

#[test]
fn test_fault_on_line_break() {
    let mut sink = FailingSink::new(1);
    let mut renderer = TextRenderer::new(&mut sink);
    renderer.keyword("SELECT");
    renderer.new_line();
    renderer.new_line();
    renderer.identifier("a");
    let fault = renderer.fault().map(ToString::to_string);
    drop(renderer);

    assert_eq!(fault.as_deref(), Some("sink closed at write 2"));
    assert_eq!(sink.attempts, 2);
    assert_eq!(String::from_utf8(sink.written).unwrap(), "SELECT");
}

#[test]
fn test_fault_while_indenting() {
    let mut sink = FailingSink::new(2);
    let mut renderer = TextRenderer::new(&mut sink);
    renderer.keyword("SELECT");
    renderer.indent();
    renderer.new_line();
    // the indentation of "a" fails
    renderer.identifier("a");
    renderer.identifier("b");
    let fault = renderer.fault().map(ToString::to_string);
    drop(renderer);

    assert_eq!(fault.as_deref(), Some("sink closed at write 3"));
    assert_eq!(sink.attempts, 3);
    assert_eq!(String::from_utf8(sink.written).unwrap(), "SELECT\n");
}

#[test]
fn test_renderer_by_reference() {
    fn emit_list(mut renderer: impl Renderer, items: &[&str]) {
        for (idx, item) in items.iter().enumerate() {
            if idx > 0 {
                renderer.symbol(",");
            }
            renderer.identifier(item);
        }
    }

    let output = render(|r| {
        r.keyword("SELECT");
        emit_list(&mut *r, &["a", "b", "c"]);
    });
    assert_eq!(output, "SELECT a, b, c");
}

#[test]
fn test_space_right_after_newline() {
    let output = render(|r| {
        r.indent();
        r.new_line();
        r.space();
        r.identifier("a");
        r.new_line();
    });
    assert_eq!(output, "\n   a\n");

    // the line break is still pending, so a second one collapses
    let output = render(|r| {
        r.identifier("a");
        r.new_line();
        r.space();
        r.new_line();
        r.identifier("b");
    });
    assert_eq!(output, "a\n b");
}

#[test]
fn test_has_written() {
    let mut renderer = TextRenderer::new(Vec::new());
    renderer.indent();
    renderer.refuse_space();
    renderer.unindent();
    assert!(!renderer.has_written());
    renderer.new_line();
    assert!(renderer.has_written());

    let mut renderer = TextRenderer::new(Vec::new());
    renderer.indent();
    renderer.keyword("SELECT");
    assert!(renderer.has_written());
}

/// Counts the warnings emitted while it is the active subscriber.
struct WarnCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: LayerContext<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn test_negative_depth_is_reported_once_per_renderer() {
    let warnings = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(Arc::clone(&warnings)));

    tracing::subscriber::with_default(subscriber, || {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.unindent();
        renderer.indent();
        renderer.unindent();
        renderer.unindent();
        assert_eq!(renderer.indent_level(), -2);
        assert_eq!(warnings.load(Ordering::SeqCst), 1);

        let mut renderer = TextRenderer::new(Vec::new());
        renderer.unindent();
        assert_eq!(warnings.load(Ordering::SeqCst), 2);
    });
}
