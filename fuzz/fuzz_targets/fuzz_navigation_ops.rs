#![no_main]

//! Drive random push/pop/pop-to/pop-to-root/appear sequences and check the
//! controller against the reference model after every step.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use navkit::LayoutDirection;
use navkit_harness::RecordingHost;
use navkit_harness::model::{NavOp, Scenario};

#[derive(Debug, Arbitrary)]
enum Op {
    Push { aware: bool, animated: bool },
    Pop { animated: bool },
    PopToRoot { animated: bool },
    PopTo { depth: u8, animated: bool },
    Appear,
}

impl From<Op> for NavOp {
    fn from(op: Op) -> Self {
        match op {
            Op::Push { aware, animated } => NavOp::Push { aware, animated },
            Op::Pop { animated } => NavOp::Pop { animated },
            Op::PopToRoot { animated } => NavOp::PopToRoot { animated },
            Op::PopTo { depth, animated } => NavOp::PopTo {
                depth: usize::from(depth),
                animated,
            },
            Op::Appear => NavOp::Appear,
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    rtl: bool,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let direction = if input.rtl {
        LayoutDirection::RightToLeft
    } else {
        LayoutDirection::LeftToRight
    };
    let mut scenario = Scenario::with_host(RecordingHost::with_direction(direction));
    for op in input.ops.into_iter().take(256) {
        let (actual, expected) = scenario.step(op.into());
        assert_eq!(actual, expected);
        if let Err(msg) = scenario.check() {
            panic!("{msg}");
        }
    }
});
