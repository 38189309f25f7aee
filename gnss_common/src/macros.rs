/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

/// macro to flatten nested "if let .." trees into a construct akin to Scala for-comprehensions.
/// Each arm can (optionally) specify a fail block or a fail closure that produces the value of the
/// whole expression if the respective match fails.
///
/// Constraints:
///   - if there is an `else` clause both the match expression and the else clause have to be blocks
///   - we always require a ',' separator between non-terminal arms, even if they end in blocks
///   - fail closures get the failed match value, which is the whole `Result`/`Option`, not the error
///
/// ```
/// use gnss_common::if_let;
/// let layers: Option<&Vec<i32>> = Some(&vec![1,2,3]);
/// let res = if_let! {
///     Some(layers) = { layers } else { -1 },
///     Some(layer)  = { layers.get(1) } else { -2 } => {
///         *layer
///     }
/// };
/// assert_eq!( res, 2);
/// ```
#[macro_export]
macro_rules! if_let {
    //--- the leafs
    { $p:pat = $x:block else $e:block => $r:expr } => {
        if let $p = $x { $r } else $e
    };
    { $p:pat = $x:block else $closure:expr => $r:expr } => {
        match $x {
            $p => { $r }
            other => { $closure( other) }
        }
    };
    { $p:pat = $x:expr => $r:expr } => {
        if let $p = $x { $r }
    };

    //--- the recursive tt munchers
    { $p:pat = $x:block else $e:block , $($ts:tt)+ } => {
        if let $p = $x { $crate::if_let! { $($ts)+ } } else $e
    };
    { $p:pat = $x:block else $closure:expr , $($ts:tt)+ } => { // expr covers closures
        match $x {
            $p => { $crate::if_let! { $($ts)+ } }
            other => { $closure( other) } // watch out - 'other' type is not Error but Result
        }
    };
    { $p:pat = $x:expr , $($ts:tt)+ } => {
        if let $p = $x {
            $crate::if_let! { $($ts)+ }
        }
    };
}
pub use if_let; // preserve 'macros' module across crates

#[macro_export]
macro_rules! io_error {
    ( $kind:expr, $fmt:literal $(, $($arg:expr),* )? ) =>
    {
        std::io::Error::new( $kind, format!($fmt, $( $($arg),* )?).as_str())
    }
}
pub use io_error;

/// syntactic sugar macro to define thiserror Error enums:
/// ```
/// gnss_common::define_error!{ pub MyNetError =
///   IOError( #[from] std::io::Error ) : "IO error: {0}",
///   OpFailed(String) : "operation failed: {0}"
/// }
/// ```
/// will get expanded into
/// ```
/// #[derive(thiserror::Error,Debug)]
/// pub enum MyNetError {
///     #[error("IO error: {0}")]
///     IOError(#[from] std::io::Error),
///
///     #[error("operation failed: {0}")]
///     OpFailed(String),
/// }
/// ```
#[macro_export]
macro_rules! define_error {
    ($vis:vis $name:ident = $( $err_variant:ident ( $( $( #[$meta:meta] )? $field_type:ty),* ) : $msg_lit:literal ),*) => {
        #[derive(thiserror::Error,Debug)]
        $vis enum $name {
            $(
                #[error($msg_lit)]
                $err_variant ( $( $(#[$meta])? $field_type ),*  )
            ),*
        }
    }
}
pub use define_error;
