use super::*;

#[test]
fn notice_state_default_is_empty() {
    assert!(NoticeState::default().items.is_empty());
}

#[test]
fn push_assigns_increasing_ids_in_order() {
    let mut notices = NoticeState::default();
    let a = notices.push(NoticeKind::Success, "Login realizado com sucesso!");
    let b = notices.push(NoticeKind::Error, "Credenciais inválidas");
    assert!(b > a);
    let messages: Vec<_> = notices.items.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, ["Login realizado com sucesso!", "Credenciais inválidas"]);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut notices = NoticeState::default();
    let a = notices.push(NoticeKind::Info, "one");
    let b = notices.push(NoticeKind::Warning, "two");
    notices.dismiss(a);
    assert_eq!(notices.items.len(), 1);
    assert_eq!(notices.items[0].id, b);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut notices = NoticeState::default();
    let a = notices.push(NoticeKind::Info, "one");
    notices.dismiss(a);
    let b = notices.push(NoticeKind::Info, "two");
    assert_ne!(a, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut notices = NoticeState::default();
    notices.push(NoticeKind::Info, "one");
    notices.dismiss(999);
    assert_eq!(notices.items.len(), 1);
}

#[test]
fn kind_classes_are_distinct() {
    let classes = [NoticeKind::Success, NoticeKind::Info, NoticeKind::Warning, NoticeKind::Error].map(NoticeKind::class);
    assert_eq!(classes, ["notice--success", "notice--info", "notice--warning", "notice--error"]);
}
