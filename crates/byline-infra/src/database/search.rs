//! Free-text search filter over posts.

use sea_orm::Condition;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;

use super::entity::post;

/// Build the listing filter for an optional free-text term.
///
/// An absent or empty term matches every post. Otherwise a post matches
/// when the term occurs case-insensitively as a substring of its title,
/// its content, or any element of its tags. The term is literal text:
/// LIKE metacharacters are escaped before the pattern is built, so user
/// input can never smuggle wildcards into the query.
pub fn search_filter(term: Option<&str>) -> Condition {
    let Some(term) = term.filter(|t| !t.is_empty()) else {
        return Condition::all();
    };

    let pattern = format!("%{}%", escape_like(term));
    Condition::any()
        .add(Expr::col((post::Entity, post::Column::Title)).ilike(pattern.clone()))
        .add(Expr::col((post::Entity, post::Column::Content)).ilike(pattern.clone()))
        .add(Expr::cust_with_values(
            r#"EXISTS (SELECT 1 FROM unnest("posts"."tags") AS tag WHERE tag ILIKE ?)"#,
            [pattern],
        ))
}

/// Escape `\`, `%` and `_` so a LIKE pattern treats them as literals.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
