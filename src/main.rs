// vislist: step-through animator for classroom cursor-list operations

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use vislist::animator::Animator;
use vislist::command::Command;
use vislist::list::{CursorList, SeqList};
use vislist::stepper::StepController;
use vislist::ui::{spawn_input_thread, TuiSink};

type Tracked = Rc<RefCell<SeqList<String>>>;

fn tracked() -> Tracked {
    Rc::new(RefCell::new(SeqList::new()))
}

fn main() -> io::Result<()> {
    eprintln!("vislist demo: space steps, a plays, p pauses, arrows change speed, q quits");

    let controller = Arc::new(StepController::new());
    let sink = TuiSink::new(Arc::clone(&controller))?;
    let input = spawn_input_thread(Arc::clone(&controller));
    let mut animator = Animator::with_controller(sink, Arc::clone(&controller));

    let numbers = tracked();
    let buffer = tracked();
    let users = tracked();

    animator.add_list(&numbers, "numbers")?;
    animator.add_list(&buffer, "buffer")?;
    animator.add_list(&users, "users")?;

    for value in ["42", "17", "63"] {
        numbers.borrow_mut().append(value.to_string());
        animator.animate(Command::Append, Some(&format!("append {value} at the end")))?;
    }

    numbers.borrow_mut().to_first();
    animator.animate(Command::ToFirst, Some("walk to the first element"))?;

    numbers.borrow_mut().advance();
    animator.animate(Command::Next, Some("one element forward"))?;

    let picked = numbers.borrow().current().cloned();
    animator.animate(Command::GetContent, Some("read the current element"))?;

    if let Some(value) = picked {
        buffer.borrow_mut().append(value.clone());
        animator.animate_list(&buffer, Command::Append, Some(&format!("copy {value} over")))?;
    }

    numbers.borrow_mut().set_current("99".to_string());
    animator.animate(Command::SetContent, Some("overwrite it with 99"))?;

    numbers.borrow_mut().insert_before_current("7".to_string());
    animator.animate(Command::Insert, Some("insert 7 before the cursor"))?;

    animator.animate(Command::Mark, Some("remember this node"))?;

    numbers.borrow_mut().to_last();
    animator.animate(Command::ToLast, Some("jump to the last element"))?;

    numbers.borrow_mut().advance();
    animator.animate(Command::Next, Some("step past the end"))?;

    animator.animate(Command::Next, Some("the cursor is off the list now"))?;

    animator.animate(Command::Unmark, Some("forget the mark"))?;

    numbers.borrow_mut().to_first();
    animator.animate(Command::ToFirst, Some("back to the front"))?;

    numbers.borrow_mut().remove_current();
    animator.animate(Command::Remove, Some("drop the first element"))?;

    {
        let mut target = numbers.borrow_mut();
        let mut source = buffer.borrow_mut();
        target.concat(&mut source);
    }
    animator.animate(Command::Concat, Some("concatenate buffer onto numbers"))?;

    animator.remove_list(&buffer)?;

    for entry in ["ID 4711:Ada Lovelace", "ID 4712:Alan Turing"] {
        users.borrow_mut().append(entry.to_string());
        animator.animate_list(&users, Command::Append, Some("register a user"))?;
    }
    users.borrow_mut().to_first();
    animator.animate_list(&users, Command::ToFirst, None)?;
    animator.animate_list(&users, Command::Mark, Some("records split on ':' across node lines"))?;

    // script done; keep the final frame up until the user quits
    while !controller.is_shut_down() {
        animator.refresh()?;
        thread::sleep(Duration::from_millis(100));
    }

    let mut sink = animator.into_sink();
    sink.restore()?;
    let _ = input.join();
    Ok(())
}
