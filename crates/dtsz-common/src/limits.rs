//! Centralized limits and thresholds for declaration emit.
//!
//! # Categories
//!
//! - **Recursion Depths**: Limits to prevent stack overflow in recursive rewrites
//! - **Operation Counts**: Limits to prevent runaway loops in iterative algorithms

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum depth for reusing a written type annotation.
///
/// Each nested type node adds a frame to the reuse walk. Past this depth the
/// annotation is treated as not reusable and handed to the resolver instead.
///
/// ```typescript
/// type Deep = Array<Array<Array<Array</* ... hundreds of levels ... */>>>>;
/// ```
pub const MAX_TYPE_REUSE_DEPTH: u32 = 500;

/// Maximum depth for inferring a type from an initializer expression.
///
/// ```typescript
/// export const nested = { a: { b: { c: { /* ... */ } } } } as const;
/// ```
pub const MAX_EXPRESSION_INFERENCE_DEPTH: u32 = 200;

/// Maximum depth for folding an enum member initializer.
pub const MAX_ENUM_EVALUATION_DEPTH: u32 = 100;

// =============================================================================
// Operation Count Limits
// =============================================================================

/// Extra headroom on top of the number of late-paintable statements when
/// draining the late-binding worklist.
///
/// Each statement can be queued at most once per painting, so the worklist is
/// bounded by the statement count; anything beyond this slack is reported as
/// an internal error instead of looping.
pub const LATE_STATEMENT_ITERATION_SLACK: usize = 1;

/// Maximum number of characters printed for a single serialized type before a
/// resolver should report truncation.
pub const MAX_SERIALIZED_TYPE_LENGTH: usize = 100_000;
