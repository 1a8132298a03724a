/// Builds a [`Value`](crate::Value) from Lua-flavoured literal syntax.
///
/// - `nil`, `true`, `false` map to their variants
/// - `[a, b, c]` builds an `Array`
/// - `{ key => value, ... }` builds a `Table`, keeping entry order
/// - anything else goes through `Value::from`
///
/// Elements, keys and values may carry a leading `-`, as in `[-1, 2]`.
///
/// # Examples
///
/// ```rust
/// use serde_luatable::{lua, load};
///
/// let expected = lua!({ "name" => "Details", "tags" => ["ui", "dps"] });
/// assert_eq!(load(r#"{ name = "Details", tags = { "ui", "dps" } }"#).unwrap(), expected);
/// ```
#[macro_export]
macro_rules! lua {
    // Array elements, one at a time so a leading `-` stays with its operand.
    (@array [$($out:expr,)*]) => {
        vec![$($out,)*]
    };

    (@array [$($out:expr,)*] - $elem:tt $(, $($rest:tt)*)?) => {
        $crate::lua!(@array [$($out,)* $crate::lua!(-$elem),] $($($rest)*)?)
    };

    (@array [$($out:expr,)*] $elem:tt $(, $($rest:tt)*)?) => {
        $crate::lua!(@array [$($out,)* $crate::lua!($elem),] $($($rest)*)?)
    };

    // Table entries: a key, then its value.
    (@table $table:ident) => {};

    (@table $table:ident - $key:tt => $($rest:tt)*) => {
        $crate::lua!(@value $table [$crate::lua!(-$key)] $($rest)*)
    };

    (@table $table:ident $key:tt => $($rest:tt)*) => {
        $crate::lua!(@value $table [$crate::lua!($key)] $($rest)*)
    };

    (@value $table:ident [$key:expr] - $value:tt $(, $($rest:tt)*)?) => {
        $table.insert($key, $crate::lua!(-$value));
        $crate::lua!(@table $table $($($rest)*)?);
    };

    (@value $table:ident [$key:expr] $value:tt $(, $($rest:tt)*)?) => {
        $table.insert($key, $crate::lua!($value));
        $crate::lua!(@table $table $($($rest)*)?);
    };

    (nil) => {
        $crate::Value::Nil
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($tt:tt)+ ]) => {
        $crate::Value::Array($crate::lua!(@array [] $($tt)+))
    };

    ({}) => {
        $crate::Value::Table($crate::LuaTable::new())
    };

    ({ $($tt:tt)+ }) => {{
        let mut table = $crate::LuaTable::new();
        $crate::lua!(@table table $($tt)+);
        $crate::Value::Table(table)
    }};

    ($e:expr) => {
        $crate::Value::from($e)
    };
}
