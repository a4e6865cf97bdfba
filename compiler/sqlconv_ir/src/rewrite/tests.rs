use super::*;
use crate::test_support::{ids, tokenize};
use crate::StringEmitter;
use pretty_assertions::assert_eq;

// === Casing ===

#[test]
fn casing_detection() {
    assert_eq!(Casing::detect("SELECT"), Some(Casing::Upper));
    assert_eq!(Casing::detect("select"), Some(Casing::Lower));
    assert_eq!(Casing::detect("Select"), Some(Casing::Title));
    assert_eq!(Casing::detect("Order_Items"), Some(Casing::Title));
    assert_eq!(Casing::detect("iPhone"), Some(Casing::Mixed));
    assert_eq!(Casing::detect("VARCHAR2"), Some(Casing::Upper));
    assert_eq!(Casing::detect("A"), Some(Casing::Upper));
    assert_eq!(Casing::detect("42"), None);
    assert_eq!(Casing::detect("("), None);
}

#[test]
fn casing_application() {
    assert_eq!(Casing::Upper.apply("newName"), "NEWNAME");
    assert_eq!(Casing::Lower.apply("NewName"), "newname");
    assert_eq!(Casing::Title.apply("ORDER_items x"), "Order_Items X");
    assert_eq!(Casing::Mixed.apply("newName"), "newName");
}

// === change family ===

#[test]
fn change_follows_uppercase_template() {
    let mut list = tokenize("SELECT x");
    let all = ids(&list);
    list.change(all[2], "newname", Some(all[0])).unwrap();
    assert_eq!(list.render(), "SELECT NEWNAME");
}

#[test]
fn change_follows_template_regardless_of_input_case() {
    let mut list = tokenize("from Dual");
    let all = ids(&list);
    list.change(all[2], "SYSIBM.SYSDUMMY1", Some(all[2])).unwrap();
    assert_eq!(list.render(), "from Sysibm.Sysdummy1");
    list.change(all[0], "FROM", Some(all[0])).unwrap();
    assert_eq!(list.render(), "from Sysibm.Sysdummy1");
}

#[test]
fn change_without_template_is_verbatim() {
    let mut list = tokenize("SELECT");
    let t = list.head().unwrap();
    list.change(t, "select", None).unwrap();
    assert_eq!(list.render(), "select");
}

#[test]
fn change_overwrites_previous_value() {
    let mut list = tokenize("nvl");
    let t = list.head().unwrap();
    list.change_no_format(t, "IFNULL").unwrap();
    list.change_no_format(t, "COALESCE").unwrap();
    assert_eq!(list.render(), "COALESCE");
}

#[test]
fn empty_value_is_rejected() {
    let mut list = tokenize("x");
    let t = list.head().unwrap();
    list.change_no_format(t, "y").unwrap();
    assert_eq!(
        list.change_no_format(t, ""),
        Err(RewriteError::EmptyValue(t))
    );
    assert_eq!(list.change(t, "", None), Err(RewriteError::EmptyValue(t)));
    assert_eq!(list.render(), "y");
}

#[test]
fn dead_token_is_rejected() {
    let mut list = tokenize("x y");
    let all = ids(&list);
    list.unlink(all[0]);
    assert_eq!(
        list.change_no_format(all[0], "z"),
        Err(RewriteError::StaleToken(all[0]))
    );
    assert_eq!(
        list.change(all[2], "z", Some(all[0])),
        Err(RewriteError::StaleToken(all[0]))
    );
    assert_eq!(list.remove(all[0], true), Err(RewriteError::StaleToken(all[0])));
    assert_eq!(list.render(), " y");
}

#[test]
fn change_int_and_staged_value() {
    let mut list = tokenize("a b");
    let all = ids(&list);
    list.change_int(all[0], -7).unwrap();
    let mut staged = TokenValue::from("dbo.");
    staged.append_token(&list, all[2]).unwrap();
    list.change_to_value(all[2], &staged).unwrap();
    assert_eq!(list.render(), "-7 dbo.b");
}

#[test]
fn change_from_token_window() {
    let mut list = tokenize("DATEADD x");
    let all = ids(&list);
    list.change_from_token(all[2], all[0], 4, 3).unwrap();
    assert_eq!(list.render(), "DATEADD ADD");
    assert_eq!(
        list.change_from_token(all[2], all[0], 40, 3),
        Err(RewriteError::EmptyValue(all[2]))
    );
}

#[test]
fn format_target_uses_own_source_by_default() {
    let mut list = tokenize("Getdate x");
    let all = ids(&list);
    list.change_no_format(all[0], "NOW").unwrap();
    list.format_target(all[0], None).unwrap();
    assert_eq!(list.effective_text(all[0]), Some("Now"));

    list.format_target(all[0], Some(all[2])).unwrap();
    assert_eq!(list.effective_text(all[0]), Some("now"));

    // No rewritten value: nothing to format.
    list.format_target(all[2], Some(all[0])).unwrap();
    assert!(!list.is_target_set(all[2]));
}

// === clear, spaces ===

#[test]
fn clear_is_idempotent() {
    let mut list = tokenize("SELECT 1");
    let t = list.head().unwrap();
    list.change_no_format(t, "select").unwrap();
    list.change_no_format(t, "sel").unwrap();
    list.clear_target(t).unwrap();
    assert_eq!(list.render(), "SELECT 1");
    list.clear_target(t).unwrap();
    assert_eq!(list.render(), "SELECT 1");
    assert!(!list.is_target_set(t));
}

#[test]
fn replace_with_spaces_keeps_width() {
    let mut list = tokenize("a NOLOCK b");
    let all = ids(&list);
    list.replace_with_spaces(all[2]).unwrap();
    assert_eq!(list.render(), "a        b");
    assert_eq!(list.target_len(all[2]), 6);
}

#[test]
fn replace_with_spaces_counts_characters() {
    let mut list = tokenize("größe");
    let t = list.head().unwrap();
    list.replace_with_spaces(t).unwrap();
    assert_eq!(list.render(), "     ");
}

#[test]
fn replace_with_spaces_keeps_line_breaks() {
    let mut list = tokenize("a 'x\r\nyz\n' b");
    let all = ids(&list);
    list.replace_with_spaces(all[2]).unwrap();
    assert_eq!(list.render(), "a   \r\n  \n  b");
}

// === remove / restore ===

#[test]
fn remove_absorbs_preceding_space() {
    let mut list = tokenize("a  b");
    let all = ids(&list);
    list.remove(all[2], true).unwrap();
    assert_eq!(list.render(), "a");
    assert!(list.is_removed(all[1]));
}

#[test]
fn remove_without_absorption_keeps_space() {
    let mut list = tokenize("a  b");
    let all = ids(&list);
    list.remove(all[2], false).unwrap();
    assert_eq!(list.render(), "a  ");
    assert!(!list.is_removed(all[1]));
}

#[test]
fn line_breaks_are_not_absorbed() {
    let mut list = tokenize("a\nb");
    let all = ids(&list);
    list.remove(all[2], true).unwrap();
    assert_eq!(list.render(), "a\n");
}

#[test]
fn removed_tokens_stay_linked() {
    let mut list = tokenize("a b");
    let all = ids(&list);
    list.remove(all[2], true).unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(ids(&list), all);
    assert_eq!(list.target_len(all[2]), 0);
}

#[test]
fn restore_brings_token_back() {
    let mut list = tokenize("a b");
    let all = ids(&list);
    list.remove(all[2], false).unwrap();
    list.restore(all[2]).unwrap();
    assert_eq!(list.render(), "a b");
}

#[test]
fn remove_range_inclusive() {
    let mut list = tokenize("SELECT  1  FROM dual");
    let all = ids(&list);
    list.remove_range(all[4], all[6], true).unwrap();
    assert_eq!(list.render(), "SELECT  1");
}

#[test]
fn remove_range_requires_forward_order() {
    let mut list = tokenize("a b c");
    let all = ids(&list);
    assert_eq!(
        list.remove_range(all[4], all[0], false),
        Err(RewriteError::BrokenRange {
            first: all[4],
            last: all[0]
        })
    );
    assert_eq!(list.render(), "a b c");
}

#[test]
fn select_one_from_dual_scenario() {
    let mut list = tokenize("SELECT  1  FROM dual");
    let all = ids(&list);
    list.remove_range(all[4], all[6], true).unwrap();
    list.change(all[0], "select", None).unwrap();
    assert_eq!(list.render(), "select  1");
}

// === rendering ===

#[test]
fn render_identity_without_edits() {
    let source = "select a, 'x' from t\n  where b = 1";
    let list = tokenize(source);
    assert_eq!(list.render(), source);
}

#[test]
fn render_includes_inserted_tokens() {
    let mut list = tokenize("select a");
    let a = list.tail().unwrap();
    let space = list
        .insert_after(a, crate::Token::synthesized(crate::TokenKind::Symbol, " "))
        .unwrap();
    list.insert_after(space, crate::Token::synthesized(crate::TokenKind::Word, "b"))
        .unwrap();
    assert_eq!(list.render(), "select a b");
}

#[test]
fn append_target_and_len_agree() {
    let mut list = tokenize("x yy");
    let all = ids(&list);
    list.change_no_format(all[0], "héllo").unwrap();
    let mut out = String::new();
    for &id in &all {
        let before = out.len();
        list.append_target(id, &mut out);
        assert_eq!(out.len() - before, list.target_len(id));
    }
    assert_eq!(out, "héllo yy");
}

#[test]
fn render_into_emitter_matches_render() {
    let mut list = tokenize("a b c");
    let all = ids(&list);
    list.remove(all[2], true).unwrap();
    let mut emitter = StringEmitter::new();
    list.render_into(&mut emitter);
    assert_eq!(emitter.into_string(), list.render());
}

mod proptest_render {
    use crate::test_support::{ids, tokenize};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn untouched_list_renders_source(source in "[a-zA-Z0-9 ',.()\n\t]{0,64}") {
            let list = tokenize(&source);
            prop_assert_eq!(list.render(), source);
        }

        #[test]
        fn clearing_every_target_restores_source(
            source in "[a-z ]{1,40}",
            replacement in "[A-Z]{1,5}",
        ) {
            let mut list = tokenize(&source);
            for id in ids(&list) {
                list.change_no_format(id, &replacement).unwrap();
            }
            for id in ids(&list) {
                list.clear_target(id).unwrap();
            }
            prop_assert_eq!(list.render(), source);
        }

        #[test]
        fn forward_and_backward_walks_agree(source in "[a-z ]{0,40}", picks in prop::collection::vec(any::<u8>(), 0..8)) {
            let mut list = tokenize(&source);
            for pick in picks {
                let all = ids(&list);
                if all.is_empty() {
                    break;
                }
                let id = all[usize::from(pick) % all.len()];
                if pick % 2 == 0 {
                    list.unlink(id);
                } else {
                    list.remove(id, true).unwrap();
                }
            }
            let forward = ids(&list);
            let mut backward: Vec<_> = list.iter_rev().map(|(id, _)| id).collect();
            backward.reverse();
            prop_assert_eq!(forward.len(), list.len());
            prop_assert_eq!(forward, backward);
        }
    }
}
