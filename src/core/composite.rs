//! Composite formatting: `format(provider, "Total: {0,10:R}", args)`.
//!
//! Format items have the shape `{index[,alignment][:specifier]}`; `{{` and `}}` are
//! literal braces. Each argument is first offered to the provider's custom formatter, and
//! rendered on its own only when the provider has none or the formatter declines.

use crate::domain::ports::{FormatArg, FormatProvider};
use crate::utils::error::{CustomerError, Result};

/// Widest padding a format item may request.
const MAX_ALIGNMENT: usize = 1_000_000;

#[derive(Debug, PartialEq, Eq)]
struct FormatItem<'t> {
    index: usize,
    alignment: Option<isize>,
    specifier: &'t str,
}

pub fn format(
    provider: &dyn FormatProvider,
    template: &str,
    args: &[FormatArg<'_>],
) -> Result<String> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        output.push_str(&rest[..pos]);
        let brace = rest.as_bytes()[pos];
        let after = &rest[pos + 1..];

        if brace == b'}' {
            if after.starts_with('}') {
                output.push('}');
                rest = &after[1..];
                continue;
            }
            return Err(invalid(template, "unescaped '}'"));
        }

        if after.starts_with('{') {
            output.push('{');
            rest = &after[1..];
            continue;
        }

        let end = after
            .find('}')
            .ok_or_else(|| invalid(template, "format item is not closed"))?;
        let item = parse_item(template, &after[..end])?;

        let arg = args
            .get(item.index)
            .ok_or(CustomerError::ArgumentIndexOutOfRange {
                index: item.index,
                count: args.len(),
            })?;

        let text = format_arg(provider, item.specifier, arg)?;
        pad_into(&mut output, &text, item.alignment);
        rest = &after[end + 1..];
    }

    output.push_str(rest);
    Ok(output)
}

fn format_arg(provider: &dyn FormatProvider, specifier: &str, arg: &FormatArg<'_>) -> Result<String> {
    if let Some(formatter) = provider.custom_formatter().filter(|f| f.can_format()) {
        if let Some(text) = formatter.format(specifier, Some(arg), provider) {
            return Ok(text);
        }
        tracing::trace!("Custom formatter declined {:?}, using default rendering", arg);
    }

    match arg {
        FormatArg::Customer(customer) => {
            customer.render_with_locale(Some(specifier), provider.locale())
        }
        FormatArg::Decimal(value) => Ok(provider.locale().format_decimal(value)),
        FormatArg::Str(value) => Ok((*value).to_string()),
        FormatArg::Display(value) => Ok(value.to_string()),
    }
}

fn parse_item<'t>(template: &str, body: &'t str) -> Result<FormatItem<'t>> {
    if body.contains('{') {
        return Err(invalid(template, "'{' inside format item"));
    }

    let (head, specifier) = match body.split_once(':') {
        Some((head, specifier)) => (head, specifier),
        None => (body, ""),
    };

    let (index, alignment) = match head.split_once(',') {
        Some((index, alignment)) => {
            let alignment = alignment
                .trim()
                .parse::<isize>()
                .map_err(|_| invalid(template, "alignment is not a number"))?;
            if alignment.unsigned_abs() >= MAX_ALIGNMENT {
                return Err(invalid(template, "alignment is too large"));
            }
            (index, Some(alignment))
        }
        None => (head, None),
    };

    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| invalid(template, "format item index is not a number"))?;

    Ok(FormatItem {
        index,
        alignment,
        specifier,
    })
}

/// Positive alignment pads on the left, negative on the right.
fn pad_into(output: &mut String, text: &str, alignment: Option<isize>) {
    let Some(alignment) = alignment else {
        output.push_str(text);
        return;
    };

    let width = alignment.unsigned_abs();
    let len = text.chars().count();
    let padding = " ".repeat(width.saturating_sub(len));

    if alignment >= 0 {
        output.push_str(&padding);
        output.push_str(text);
    } else {
        output.push_str(text);
        output.push_str(&padding);
    }
}

fn invalid(template: &str, reason: &str) -> CustomerError {
    CustomerError::InvalidTemplate {
        template: template.to_string(),
        reason: reason.to_string(),
    }
}
