use memostack_core::{Memo, MemoStack, StackError, Task};

fn completed_memo(name: &str) -> Memo {
    let mut task = Task::new("done");
    task.complete();
    Memo::with_tasks(name, [task])
}

#[test]
fn new_stack_is_empty() {
    let stack = MemoStack::new();

    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
}

#[test]
fn peek_and_pop_on_empty_stack_fail() {
    let mut stack = MemoStack::new();

    assert_eq!(stack.peek().unwrap_err(), StackError::Empty);
    assert_eq!(stack.pop().unwrap_err(), StackError::Empty);
}

#[test]
fn push_none_is_a_noop() {
    let mut stack = MemoStack::new();
    stack.push(None::<Memo>);

    assert!(stack.is_empty());
}

#[test]
fn peek_returns_last_pushed_without_removing() {
    let mut stack = MemoStack::new();
    stack.push(Memo::new("first"));
    stack.push(Memo::new("second"));

    assert_eq!(stack.peek().unwrap().name(), "second");
    assert_eq!(stack.len(), 2);
}

#[test]
fn push_then_pop_returns_the_completed_memo() {
    let mut stack = MemoStack::new();
    let memo = completed_memo("Test");
    stack.push(memo.clone());

    assert_eq!(stack.pop().unwrap(), memo);
    assert!(stack.is_empty());
}

#[test]
fn pop_of_empty_memo_succeeds() {
    let mut stack = MemoStack::new();
    stack.push(Memo::new("nothing to do"));

    assert!(stack.pop().is_ok());
}

#[test]
fn pop_with_open_task_fails_and_keeps_stack() {
    let mut stack = MemoStack::new();
    stack.push(completed_memo("below"));
    let mut memo = Memo::new("Chores");
    memo.add_task(Task::new("open"));
    memo.add_task(Task::new("also open"));
    stack.push(memo);

    let err = stack.pop().unwrap_err();
    assert_eq!(
        err,
        StackError::MemoNotCompleted {
            name: "Chores".to_string(),
            open_tasks: 2,
        }
    );
    assert_eq!(
        err.to_string(),
        "Oops! The memo 'Chores' is not completed, and therefore cannot be removed!"
    );
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek().unwrap().name(), "Chores");
}

#[test]
fn completing_top_memo_through_peek_mut_unlocks_pop() {
    let mut stack = MemoStack::new();
    stack.push(Memo::with_tasks("Chores", [Task::new("dishes")]));

    assert!(stack.pop().is_err());
    stack.peek_mut().unwrap().complete_task(1).unwrap();

    assert_eq!(stack.pop().unwrap().name(), "Chores");
}

#[test]
fn pushing_n_memos_pops_them_in_reverse_order() {
    let mut stack = MemoStack::new();
    for index in 0..5 {
        stack.push(completed_memo(&format!("memo {index}")));
    }

    let popped: Vec<String> = std::iter::from_fn(|| stack.pop().ok())
        .map(|memo| memo.name().to_string())
        .collect();

    assert_eq!(
        popped,
        vec!["memo 4", "memo 3", "memo 2", "memo 1", "memo 0"]
    );
    assert!(stack.is_empty());
}

#[test]
fn empty_stack_message() {
    assert_eq!(StackError::Empty.to_string(), "The memo stack is empty!");
}
