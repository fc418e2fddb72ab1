//! Builds SELECTs whose WHERE clause depends on which optional filters a
//! request carries. Every predicate is pushed together with its value, so
//! placeholder numbers and the bind list cannot drift apart.

use super::params::PgBindValue;

/// Finished SQL text plus its positional parameters ($1 is `params[0]`).
#[derive(Clone, Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    /// Embed the query as a subquery of an outer statement, e.g. to aggregate
    /// filtered rows into one GeoJSON document. Numbering is unchanged.
    pub fn wrapped(self, prefix: &str, suffix: &str) -> QueryBuf {
        QueryBuf {
            sql: format!("{}{}{}", prefix, self.sql, suffix),
            params: self.params,
        }
    }
}

pub struct SelectBuilder {
    base: String,
    predicates: Vec<String>,
    params: Vec<PgBindValue>,
    order_by: Option<String>,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl SelectBuilder {
    /// `base` is `SELECT ... FROM ...` without a WHERE clause.
    pub fn new(base: impl Into<String>) -> Self {
        SelectBuilder {
            base: base.into(),
            predicates: Vec::new(),
            params: Vec::new(),
            order_by: None,
            limit: None,
            offset: None,
        }
    }

    fn push_param(&mut self, v: PgBindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }

    /// `template` holds exactly one `{}`, replaced by this value's placeholder.
    fn push_predicate(&mut self, template: &str, value: PgBindValue) -> &mut Self {
        let n = self.push_param(value);
        self.predicates.push(template.replacen("{}", &format!("${}", n), 1));
        self
    }

    pub fn eq(&mut self, column: &str, value: impl Into<PgBindValue>) -> &mut Self {
        self.push_predicate(&format!("{} = {{}}", column), value.into())
    }

    pub fn gte(&mut self, column: &str, value: impl Into<PgBindValue>) -> &mut Self {
        self.push_predicate(&format!("{} >= {{}}", column), value.into())
    }

    pub fn lte(&mut self, column: &str, value: impl Into<PgBindValue>) -> &mut Self {
        self.push_predicate(&format!("{} <= {{}}", column), value.into())
    }

    /// `column = ANY($n)` with an array parameter.
    pub fn any(&mut self, column: &str, values: impl Into<PgBindValue>) -> &mut Self {
        self.push_predicate(&format!("{} = ANY({{}})", column), values.into())
    }

    /// Case-insensitive text equality.
    pub fn eq_ignore_case(&mut self, column: &str, value: &str) -> &mut Self {
        self.push_predicate(
            &format!("lower({}) = lower({{}})", column),
            PgBindValue::Text(value.to_string()),
        )
    }

    pub fn order_by(&mut self, clause: &str) -> &mut Self {
        self.order_by = Some(clause.to_string());
        self
    }

    pub fn limit(&mut self, n: i64) -> &mut Self {
        self.limit = Some(n);
        self
    }

    pub fn offset(&mut self, n: i64) -> &mut Self {
        self.offset = Some(n);
        self
    }

    pub fn build(mut self) -> QueryBuf {
        let mut sql = self.base.trim_end().to_string();
        if !self.predicates.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.predicates.join(" AND "));
        }
        if let Some(order) = &self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }
        if let Some(limit) = self.limit {
            let n = self.push_param(PgBindValue::BigInt(limit));
            sql.push_str(&format!(" LIMIT ${}", n));
        }
        if let Some(offset) = self.offset {
            let n = self.push_param(PgBindValue::BigInt(offset));
            sql.push_str(&format!(" OFFSET ${}", n));
        }
        QueryBuf {
            sql,
            params: self.params,
        }
    }
}
