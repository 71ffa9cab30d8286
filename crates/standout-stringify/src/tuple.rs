//! The Tuple category, and tuples as argument lists.
//!
//! Both impls are generated per arity, up to twelve elements.

use std::fmt;

use crate::args::RenderArgs;
use crate::category::Category;
use crate::render::{render_value, Delimited, Render};

macro_rules! tuple_impls {
    ($( $len:literal => ($($idx:tt $name:ident),*) )+) => {
        $(
            impl<$($name: Render),*> Render for ($($name,)*) {
                const CATEGORY: Category = Category::Tuple;

                #[allow(unused_mut)]
                fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
                    let mut tuple = Delimited::open(sink, Category::Tuple)?;
                    $( tuple.entry(&self.$idx)?; )*
                    tuple.finish()
                }
            }

            impl<$($name: Render),*> RenderArgs for ($($name,)*) {
                fn count(&self) -> usize {
                    $len
                }

                #[allow(unused_variables)]
                fn render_arg<W: fmt::Write + ?Sized>(
                    &self,
                    index: usize,
                    sink: &mut W,
                ) -> fmt::Result {
                    match index {
                        $( $idx => render_value(sink, &self.$idx), )*
                        _ => Err(fmt::Error),
                    }
                }
            }
        )+
    };
}

tuple_impls! {
    0 => ()
    1 => (0 A)
    2 => (0 A, 1 B)
    3 => (0 A, 1 B, 2 C)
    4 => (0 A, 1 B, 2 C, 3 D)
    5 => (0 A, 1 B, 2 C, 3 D, 4 E)
    6 => (0 A, 1 B, 2 C, 3 D, 4 E, 5 F)
    7 => (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G)
    8 => (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H)
    9 => (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I)
    10 => (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J)
    11 => (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K)
    12 => (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K, 11 L)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text<T: Render>(value: &T) -> String {
        let mut out = String::new();
        value.render(&mut out).unwrap();
        out
    }

    #[test]
    fn test_empty_tuple() {
        assert_eq!(text(&()), "()");
    }

    #[test]
    fn test_singleton_tuple_has_no_trailing_separator() {
        assert_eq!(text(&(5,)), "(5)");
    }

    #[test]
    fn test_heterogeneous_tuple() {
        assert_eq!(text(&(1, "two", '3', 4.5, false)), "(1, two, 3, 4.5, false)");
    }

    #[test]
    fn test_largest_tuple() {
        let tuple = (1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12);
        assert_eq!(text(&tuple), "(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12)");
        assert_eq!(tuple.count(), 12);
    }

    #[test]
    fn test_nested_tuples_are_not_collapsed() {
        assert_eq!(text(&((), ((),), (1, (2, 3)))), "((), (()), (1, (2, 3)))");
    }
}
