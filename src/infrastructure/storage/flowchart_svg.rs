use std::fmt::Write as _;

const CANVAS_WIDTH: usize = 600;
const MARGIN: usize = 20;
const BOX_PADDING: usize = 12;
const LINE_HEIGHT: usize = 18;
const BOX_GAP: usize = 36;
const MAX_LINE_CHARS: usize = 60;
const EMPTY_LABEL: &str = "No advice available";

/// Renders one labeled box per segment, stacked top to bottom and joined by arrows.
pub fn render_flowchart_svg(segments: &[String]) -> String {
    let labels: Vec<Vec<String>> = if segments.is_empty() {
        vec![wrap_label(EMPTY_LABEL)]
    } else {
        segments.iter().map(|s| wrap_label(s)).collect()
    };

    let box_width = CANVAS_WIDTH - 2 * MARGIN;
    let box_heights: Vec<usize> = labels
        .iter()
        .map(|lines| lines.len() * LINE_HEIGHT + 2 * BOX_PADDING)
        .collect();
    let height = 2 * MARGIN
        + box_heights.iter().sum::<usize>()
        + BOX_GAP * box_heights.len().saturating_sub(1);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS_WIDTH}" height="{height}" viewBox="0 0 {CANVAS_WIDTH} {height}" font-family="Segoe UI, sans-serif" font-size="14">"#
    );
    svg.push_str(
        r##"<defs><marker id="arrow" markerWidth="10" markerHeight="10" refX="5" refY="5" orient="auto"><path d="M0,0 L10,5 L0,10 z" fill="#1e293b"/></marker></defs>"##,
    );
    svg.push('\n');

    let mut y = MARGIN;
    let center_x = CANVAS_WIDTH / 2;
    for (index, (lines, box_height)) in labels.iter().zip(&box_heights).enumerate() {
        if index > 0 {
            let _ = writeln!(
                svg,
                r##"<line x1="{center_x}" y1="{}" x2="{center_x}" y2="{}" stroke="#1e293b" stroke-width="2" marker-end="url(#arrow)"/>"##,
                y - BOX_GAP,
                y - 4
            );
        }

        let _ = writeln!(
            svg,
            r##"<rect x="{MARGIN}" y="{y}" width="{box_width}" height="{box_height}" rx="8" fill="#fcd34d" stroke="#1e293b" stroke-width="2"/>"##
        );

        for (line_index, line) in lines.iter().enumerate() {
            let baseline = y + BOX_PADDING + (line_index + 1) * LINE_HEIGHT - 4;
            let _ = writeln!(
                svg,
                r##"<text x="{center_x}" y="{baseline}" text-anchor="middle" fill="#0f172a">{}</text>"##,
                escape_xml(line)
            );
        }

        y += box_height + BOX_GAP;
    }

    svg.push_str("</svg>\n");
    svg
}

fn wrap_label(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > MAX_LINE_CHARS && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
