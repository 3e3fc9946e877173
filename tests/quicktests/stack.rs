use datastructures::stack::Stack;

quickcheck::quickcheck! {
    fn size_counts_pushes(xs: Vec<String>) -> bool {
        let stack: Stack<_> = xs.iter().cloned().collect();

        stack.len() == xs.len() && stack.peek() == xs.last()
    }

    fn lifo(xs: Vec<i8>) -> bool {
        let mut stack = Stack::new();
        for x in &xs {
            stack.push(*x);
        }

        let mut popped = Vec::new();
        while let Some(x) = stack.pop() {
            popped.push(x);
        }
        popped.reverse();

        popped == xs && stack.pop().is_none() && stack.len() == 0
    }

    fn peek_does_not_change_size(xs: Vec<i8>) -> bool {
        let stack: Stack<_> = xs.into_iter().collect();
        let len = stack.len();
        let _ = stack.peek();
        let _ = stack.peek();

        stack.len() == len
    }
}
