//! Self-referential graphs: `A -> B -> C -> A`, closed through a cell that is
//! filled once the cycle's head exists.

use std::cell::OnceCell;
use std::rc::Rc;

use tracedeq::{deep_equal, reflect_record, Operand, Scalar};

struct A {
    b: Rc<B>,
}
reflect_record!(A { b });

struct B {
    c: Rc<C>,
}
reflect_record!(B { c });

struct C {
    label: String,
    a: OnceCell<Rc<A>>,
}
reflect_record!(C { label, a });

fn open_chain(label: &str) -> Rc<A> {
    Rc::new(A {
        b: Rc::new(B {
            c: Rc::new(C {
                label: label.to_string(),
                a: OnceCell::new(),
            }),
        }),
    })
}

fn close(tail: &Rc<A>, head: &Rc<A>) {
    assert!(tail.b.c.a.set(Rc::clone(head)).is_ok());
}

/// Three nodes, the last pointing back at the first.
fn triangle(label: &str) -> Rc<A> {
    let a = open_chain(label);
    close(&a, &a);
    a
}

/// Six nodes, the last pointing back at the first.
fn hexagon(first: &str, second: &str) -> (Rc<A>, Rc<A>) {
    let head = open_chain(first);
    let mid = open_chain(second);
    close(&head, &mid);
    close(&mid, &head);
    (head, mid)
}

#[test]
fn each_graph_closes_on_itself() {
    let (x, y) = (triangle(""), triangle(""));
    assert!(deep_equal(&x, &y).is_equal());
}

#[test]
fn graph_compared_with_itself() {
    let x = triangle("");
    assert!(deep_equal(&x, &x).is_equal());
}

#[test]
fn both_graphs_close_into_the_same_head() {
    let (x, y) = (open_chain(""), open_chain(""));
    close(&x, &y);
    close(&y, &y);
    assert!(deep_equal(&x, &y).is_equal());
}

#[test]
fn large_cycle_against_its_own_midpoint() {
    let (head, mid) = hexagon("", "");
    assert!(deep_equal(&*head, &*mid).is_equal());
}

#[test]
fn divergence_inside_the_first_lap() {
    let (x, y) = (triangle("left"), triangle("right"));
    let outcome = deep_equal(&x, &y);
    assert_eq!(outcome.trace(), &["b", "c", "label"]);
    assert_eq!(outcome.x(), Some(&Operand::Scalar(Scalar::Str("left"))));
    assert_eq!(outcome.y(), Some(&Operand::Scalar(Scalar::Str("right"))));
}

#[test]
fn divergence_found_on_the_second_lap() {
    let x = triangle("");
    let (head, _mid) = hexagon("", "late");
    let outcome = deep_equal(&x, &head);
    assert_eq!(outcome.trace(), &["b", "c", "a", "b", "c", "label"]);
    assert_eq!(outcome.x(), Some(&Operand::Scalar(Scalar::Str(""))));
    assert_eq!(outcome.y(), Some(&Operand::Scalar(Scalar::Str("late"))));
}
