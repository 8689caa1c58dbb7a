//! Script parsing through `oxc_parser`, lowered to [`Statement`] shapes.

use crate::error::ParseError;
use crate::models::statement::{Statement, StatementShape};
use crate::sfc::Document;
use oxc_allocator::Allocator;
use oxc_ast::ast::{self, Expression};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType};

/// Source type for a script element's `lang` attribute.
pub fn source_type_for(lang: Option<&str>) -> SourceType {
    match lang {
        Some("ts") => SourceType::ts(),
        Some("tsx") => SourceType::tsx(),
        Some("jsx") => SourceType::jsx(),
        _ => SourceType::mjs(),
    }
}

/// Parse one script body; spans are shifted by `offset` into file positions.
pub fn parse_script(
    text: &str,
    offset: usize,
    source_type: SourceType,
) -> Result<Vec<Statement>, ParseError> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, text, source_type).parse();
    if ret.panicked || !ret.errors.is_empty() {
        let message = ret
            .errors
            .first()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "parser aborted".to_string());
        return Err(ParseError::Script { offset, message });
    }
    Ok(ret
        .program
        .body
        .iter()
        .map(|stmt| {
            let span = stmt.span();
            Statement::new(
                shape_of(stmt),
                offset + span.start as usize,
                offset + span.end as usize,
            )
        })
        .collect())
}

/// Top-level statements of every `setup` script element, in document order.
/// Plain scripts are never reordered and are not parsed.
pub fn parse_setup_scripts(source: &str, document: &Document) -> Result<Vec<Statement>, ParseError> {
    let mut body = Vec::new();
    for script in document.setup_scripts() {
        let lang = script.lang();
        let text = &source[script.content.start..script.content.end];
        let mut stmts = parse_script(text, script.content.start, source_type_for(lang.as_deref()))?;
        body.append(&mut stmts);
    }
    Ok(body)
}

fn shape_of(stmt: &ast::Statement<'_>) -> StatementShape {
    match stmt {
        ast::Statement::ImportDeclaration(_) => StatementShape::Import,
        ast::Statement::FunctionDeclaration(_) => StatementShape::Function,
        ast::Statement::VariableDeclaration(decl) => declaration_shape(decl),
        ast::Statement::ExpressionStatement(stmt) => match call_name(&stmt.expression) {
            Some(callee) => StatementShape::Call {
                callee,
                declared: false,
            },
            None => StatementShape::Other,
        },
        _ => StatementShape::Other,
    }
}

fn declaration_shape(decl: &ast::VariableDeclaration<'_>) -> StatementShape {
    if decl.declarations.len() != 1 {
        return StatementShape::Other;
    }
    let Some(init) = decl.declarations.first().and_then(|d| d.init.as_ref()) else {
        return StatementShape::Other;
    };
    match unwrap_expression(init) {
        Expression::ArrowFunctionExpression(_) | Expression::FunctionExpression(_) => {
            StatementShape::Function
        }
        expr => match call_name(expr) {
            Some(callee) => StatementShape::Call {
                callee,
                declared: true,
            },
            None => StatementShape::Other,
        },
    }
}

/// Look through `await`, parentheses and TypeScript assertions.
fn unwrap_expression<'b, 'a>(expr: &'b Expression<'a>) -> &'b Expression<'a> {
    match expr {
        Expression::ParenthesizedExpression(e) => unwrap_expression(&e.expression),
        Expression::AwaitExpression(e) => unwrap_expression(&e.argument),
        Expression::TSAsExpression(e) => unwrap_expression(&e.expression),
        Expression::TSSatisfiesExpression(e) => unwrap_expression(&e.expression),
        Expression::TSNonNullExpression(e) => unwrap_expression(&e.expression),
        _ => expr,
    }
}

fn call_name(expr: &Expression<'_>) -> Option<String> {
    match unwrap_expression(expr) {
        Expression::CallExpression(call) => match &call.callee {
            Expression::Identifier(id) => Some(id.name.to_string()),
            _ => None,
        },
        _ => None,
    }
}
