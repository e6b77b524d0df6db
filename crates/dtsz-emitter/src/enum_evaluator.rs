//! Constant folding for enum member initializers.
//!
//! Declaration files write every enum member with its literal value, so each
//! initializer is folded here. Literals, arithmetic, string concatenation and
//! references to earlier members of the same enum fold locally; any other
//! entity name goes to [`EmitResolver::evaluate_entity_name`], which marks the
//! result as depending on external declarations.

use dtsz_ast::node_utils::{identifier_text, node_text};
use dtsz_ast::{BinaryOperator, NodeArena, NodeData, NodeIndex, NodeList, PrefixOperator};
use dtsz_common::limits::MAX_ENUM_EVALUATION_DEPTH;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::resolver::{ConstantValue, EmitResolver, EvaluatorResult};

/// Folds the members of one enum declaration in order.
pub struct EnumEvaluator<'a> {
    arena: &'a NodeArena,
    resolver: &'a dyn EmitResolver,
    enum_declaration: NodeIndex,
    enum_name: Option<String>,
    members: FxHashMap<String, ConstantValue>,
}

impl<'a> EnumEvaluator<'a> {
    #[must_use]
    pub fn new(
        arena: &'a NodeArena,
        resolver: &'a dyn EmitResolver,
        enum_declaration: NodeIndex,
    ) -> Self {
        let enum_name = match arena.data(enum_declaration) {
            Some(NodeData::EnumDeclaration(data)) => identifier_text(arena, data.name).map(str::to_string),
            _ => None,
        };
        Self {
            arena,
            resolver,
            enum_declaration,
            enum_name,
            members: FxHashMap::default(),
        }
    }

    /// Fold every member. Members without an initializer continue the
    /// numbering of the previous numeric member; after a string member
    /// their value is unknown.
    pub fn evaluate_members(&mut self, members: &NodeList) -> Vec<(NodeIndex, EvaluatorResult)> {
        let mut results = Vec::with_capacity(members.len());
        let mut next_auto: Option<f64> = Some(0.0);
        for member in members.iter() {
            let Some(NodeData::EnumMember { name, initializer }) = self.arena.data(member) else {
                continue;
            };
            let result = if initializer.is_some() {
                self.evaluate(*initializer, 0)
            } else {
                match next_auto {
                    Some(value) => EvaluatorResult::constant(ConstantValue::Number(value)),
                    None => EvaluatorResult::unknown(),
                }
            };
            next_auto = match &result.value {
                Some(ConstantValue::Number(value)) => Some(value + 1.0),
                _ => None,
            };
            if let (Some(text), Some(value)) = (node_text(self.arena, *name), &result.value) {
                self.members.insert(text.to_string(), value.clone());
            }
            trace!(member = member.0, value = ?result.value, "enum member folded");
            results.push((member, result));
        }
        results
    }

    /// Fold one expression.
    #[must_use]
    pub fn evaluate(&self, expr: NodeIndex, depth: u32) -> EvaluatorResult {
        if depth > MAX_ENUM_EVALUATION_DEPTH {
            return EvaluatorResult::unknown();
        }
        let Some(data) = self.arena.data(expr) else {
            return EvaluatorResult::unknown();
        };
        match data {
            NodeData::NumericLiteral { text } => match parse_numeric_literal(text) {
                Some(value) => EvaluatorResult::constant(ConstantValue::Number(value)),
                None => EvaluatorResult::unknown(),
            },
            NodeData::StringLiteral { text } | NodeData::NoSubstitutionTemplateLiteral { text } => {
                EvaluatorResult::constant(ConstantValue::String(text.clone()))
            }
            NodeData::TemplateExpression { head, spans } => {
                let mut text = head.clone();
                let mut has_external_references = false;
                for span in spans {
                    let part = self.evaluate(span.expression, depth + 1);
                    has_external_references |= part.has_external_references;
                    match part.value {
                        Some(ConstantValue::String(s)) => text.push_str(&s),
                        Some(ConstantValue::Number(n)) => text.push_str(&number_to_string(n)),
                        None => {
                            return EvaluatorResult {
                                value: None,
                                has_external_references,
                            };
                        }
                    }
                    text.push_str(&span.literal);
                }
                EvaluatorResult {
                    value: Some(ConstantValue::String(text)),
                    has_external_references,
                }
            }
            NodeData::Parenthesized { expression } => self.evaluate(*expression, depth + 1),
            NodeData::PrefixUnary { operator, operand } => {
                let inner = self.evaluate(*operand, depth + 1);
                let value = match (operator, &inner.value) {
                    (PrefixOperator::Plus, Some(ConstantValue::Number(n))) => Some(*n),
                    (PrefixOperator::Minus, Some(ConstantValue::Number(n))) => Some(-n),
                    (PrefixOperator::Tilde, Some(ConstantValue::Number(n))) => {
                        Some(f64::from(!to_int32(*n)))
                    }
                    _ => None,
                };
                EvaluatorResult {
                    value: value.map(ConstantValue::Number),
                    has_external_references: inner.has_external_references,
                }
            }
            NodeData::Binary {
                left,
                operator,
                right,
            } => {
                let lhs = self.evaluate(*left, depth + 1);
                let rhs = self.evaluate(*right, depth + 1);
                let has_external_references =
                    lhs.has_external_references || rhs.has_external_references;
                let value = match (lhs.value, rhs.value) {
                    (Some(l), Some(r)) => fold_binary(*operator, l, r),
                    _ => None,
                };
                EvaluatorResult {
                    value,
                    has_external_references,
                }
            }
            NodeData::Identifier { text } => match self.members.get(text) {
                Some(value) => EvaluatorResult::constant(value.clone()),
                None => self.evaluate_externally(expr),
            },
            NodeData::PropertyAccess { expression, name } => {
                if self.is_own_enum(*expression)
                    && let Some(value) = identifier_text(self.arena, *name).and_then(|n| self.members.get(n))
                {
                    return EvaluatorResult::constant(value.clone());
                }
                self.evaluate_externally(expr)
            }
            NodeData::ElementAccess {
                expression,
                argument,
            } => {
                if self.is_own_enum(*expression)
                    && let Some(NodeData::StringLiteral { text }) = self.arena.data(*argument)
                    && let Some(value) = self.members.get(text)
                {
                    return EvaluatorResult::constant(value.clone());
                }
                self.evaluate_externally(expr)
            }
            _ => EvaluatorResult::unknown(),
        }
    }

    fn is_own_enum(&self, expression: NodeIndex) -> bool {
        self.enum_name.is_some()
            && identifier_text(self.arena, expression) == self.enum_name.as_deref()
    }

    fn evaluate_externally(&self, expr: NodeIndex) -> EvaluatorResult {
        let mut result = self
            .resolver
            .evaluate_entity_name(self.arena, expr, self.enum_declaration);
        result.has_external_references = true;
        result
    }
}

fn fold_binary(operator: BinaryOperator, left: ConstantValue, right: ConstantValue) -> Option<ConstantValue> {
    use ConstantValue::{Number, String as Str};
    match (operator, left, right) {
        (BinaryOperator::Plus, Str(l), Str(r)) => Some(Str(l + &r)),
        (BinaryOperator::Plus, Str(l), Number(r)) => Some(Str(l + &number_to_string(r))),
        (BinaryOperator::Plus, Number(l), Str(r)) => Some(Str(number_to_string(l) + &r)),
        (op, Number(l), Number(r)) => {
            let value = match op {
                BinaryOperator::Plus => l + r,
                BinaryOperator::Minus => l - r,
                BinaryOperator::Asterisk => l * r,
                BinaryOperator::Slash => l / r,
                BinaryOperator::Percent => l % r,
                BinaryOperator::AsteriskAsterisk => l.powf(r),
                BinaryOperator::LessThanLessThan => f64::from(to_int32(l).wrapping_shl(shift_count(r))),
                BinaryOperator::GreaterThanGreaterThan => {
                    f64::from(to_int32(l).wrapping_shr(shift_count(r)))
                }
                BinaryOperator::GreaterThanGreaterThanGreaterThan => {
                    f64::from(to_uint32(l).wrapping_shr(shift_count(r)))
                }
                BinaryOperator::Ampersand => f64::from(to_int32(l) & to_int32(r)),
                BinaryOperator::Bar => f64::from(to_int32(l) | to_int32(r)),
                BinaryOperator::Caret => f64::from(to_int32(l) ^ to_int32(r)),
                _ => return None,
            };
            Some(Number(value))
        }
        _ => None,
    }
}

fn to_uint32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().rem_euclid(4_294_967_296.0) as u32
}

fn to_int32(value: f64) -> i32 {
    to_uint32(value) as i32
}

fn shift_count(value: f64) -> u32 {
    to_uint32(value) & 0x1f
}

/// Number formatting used when a folded number is concatenated into a string.
fn number_to_string(value: f64) -> String {
    dtsz_ast::factory::format_number(value)
}

/// Value of a numeric literal's source text (`0x1F`, `1_000`, `1e3`, ...).
#[must_use]
pub fn parse_numeric_literal(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| *c != '_').collect();
    let radix = |digits: &str, base: u32| {
        digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(base).map(|d| acc * f64::from(base) + f64::from(d))
        })
    };
    let lower = cleaned.to_ascii_lowercase();
    if let Some(digits) = lower.strip_prefix("0x") {
        radix(digits, 16)
    } else if let Some(digits) = lower.strip_prefix("0o") {
        radix(digits, 8)
    } else if let Some(digits) = lower.strip_prefix("0b") {
        radix(digits, 2)
    } else {
        cleaned.parse::<f64>().ok()
    }
}

#[cfg(test)]
#[path = "../tests/enum_evaluator.rs"]
mod tests;
