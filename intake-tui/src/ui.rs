//! The ratatui view for the account form.
//!
//! Pure rendering: everything shown here is read back out of the widget
//! state, including validation errors, which appear in red below the
//! failing widget.

use formwork::prelude::*;
use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::form::{AccountForm, FocusField};
use crate::widgets::spinner::Spinner;

const LABEL_WIDTH: usize = 20;

pub fn render(frame: &mut Frame, form: &AccountForm, spinner: &Spinner) {
    let area = frame.area();
    let block = Block::default().title(" New Account ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let focus = form.focus();
    let mut lines: Vec<Line<'static>> = Vec::new();

    input_lines(
        &mut lines,
        "Full Name",
        &form.full_name,
        focus == FocusField::FullName,
    );
    lines.push(Line::default());

    input_lines(
        &mut lines,
        "Initial Investment",
        &form.initial_investment,
        focus == FocusField::InitialInvestment,
    );
    lines.push(Line::default());

    check_group_lines(
        &mut lines,
        "Select the risk you want to take:",
        &form.investment_risk,
        focus == FocusField::InvestmentRisk,
    );
    lines.push(Line::default());

    input_lines(
        &mut lines,
        "Comment",
        &form.comment,
        focus == FocusField::Comment,
    );
    lines.push(Line::default());

    select_lines(
        &mut lines,
        "Dependents",
        &form.dependents,
        focus == FocusField::Dependents,
    );
    lines.push(Line::default());

    checkbox_lines(&mut lines, &form.terms, focus == FocusField::Terms);
    lines.push(Line::default());

    lines.push(status_line(form, spinner));
    lines.push(Line::from(Span::styled(
        " Tab next field · Ctrl+S submit · Ctrl+R reset · Esc quit",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn label_span(label: &str, focused: bool) -> Span<'static> {
    let marker = if focused { '▸' } else { ' ' };
    let text = format!("{marker} {label:<width$} ", width = LABEL_WIDTH);
    let style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Span::styled(text, style)
}

fn push_error(lines: &mut Vec<Line<'static>>, widget: &impl Validatable) {
    if widget.error_display() != ErrorDisplay::Below {
        return;
    }
    if let Some(msg) = widget.error() {
        lines.push(Line::from(Span::styled(
            format!("    ✗ {msg}"),
            Style::default().fg(Color::Red),
        )));
    }
}

fn input_lines(lines: &mut Vec<Line<'static>>, label: &str, input: &Input, focused: bool) {
    let mut spans = vec![label_span(label, focused)];
    let value = input.value();

    if value.is_empty() && !focused {
        spans.push(Span::styled(
            input.placeholder(),
            Style::default().fg(Color::DarkGray),
        ));
    } else if focused {
        // Show the cursor by reversing the character under it.
        let cursor = input.cursor().min(value.len());
        let (before, rest) = value.split_at(cursor);
        let mut chars = rest.chars();
        let at = chars.next();
        let after: String = chars.collect();

        let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
        spans.push(Span::raw(before.to_string()));
        match at {
            Some(c) => spans.push(Span::styled(c.to_string(), cursor_style)),
            None => spans.push(Span::styled(" ".to_string(), cursor_style)),
        }
        spans.push(Span::raw(after));
    } else {
        spans.push(Span::raw(value));
    }

    lines.push(Line::from(spans));
    push_error(lines, input);
}

fn check_group_lines(
    lines: &mut Vec<Line<'static>>,
    label: &str,
    group: &CheckGroup,
    focused: bool,
) {
    lines.push(Line::from(label_span(label, focused)));

    let cursor = group.cursor();
    for (index, option) in group.options().into_iter().enumerate() {
        let indicator = if group.is_selected(index) {
            group.checked_char()
        } else {
            group.unchecked_char()
        };
        let at_cursor = focused && cursor == index;
        let marker = if at_cursor { '›' } else { ' ' };
        let style = if at_cursor {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("   {marker} {indicator} {option}"),
            style,
        )));
    }

    push_error(lines, group);
}

fn select_lines(lines: &mut Vec<Line<'static>>, label: &str, select: &Select, focused: bool) {
    let mut spans = vec![label_span(label, focused)];
    match select.selected_label() {
        Some(selected) => spans.push(Span::raw(selected)),
        None => spans.push(Span::styled(
            select.placeholder(),
            Style::default().fg(Color::DarkGray),
        )),
    }
    if focused && !select.is_open() {
        spans.push(Span::styled(
            "  (Enter to open)".to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(spans));

    if select.is_open() {
        let cursor = select.cursor();
        for (index, option) in select.options().into_iter().enumerate() {
            let marker = if select.selection() == Some(index) {
                '●'
            } else {
                '○'
            };
            let style = if cursor == index {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!("     {marker} {option}"),
                style,
            )));
        }
    }

    push_error(lines, select);
}

fn checkbox_lines(lines: &mut Vec<Line<'static>>, checkbox: &Checkbox, focused: bool) {
    let indicator = if checkbox.is_checked() {
        checkbox.checked_char()
    } else {
        checkbox.unchecked_char()
    };
    let marker = if focused { '▸' } else { ' ' };
    let style = if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    lines.push(Line::from(Span::styled(
        format!("{marker} {indicator} {}", checkbox.label()),
        style,
    )));

    push_error(lines, checkbox);
}

fn status_line(form: &AccountForm, spinner: &Spinner) -> Line<'static> {
    if form.submission.is_pending() {
        Line::from(vec![
            Span::styled(
                format!(" {} ", spinner.current()),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw("Submitting application..."),
        ])
    } else if form.submission.is_done() {
        Line::from(Span::styled(
            " Application submitted.",
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::default()
    }
}
