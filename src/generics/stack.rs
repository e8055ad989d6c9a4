use crate::error::StackError;

pub const DEFAULT_CAPACITY: usize = 100;

/// Fixed-capacity LIFO stack backed by an inline array.
///
/// The capacity is part of the type, so a stack never reallocates.
/// Invariant: `0 <= len <= N`, and exactly the first `len` slots are `Some`.
pub struct Stack<T, const N: usize = DEFAULT_CAPACITY> {
    items: [Option<T>; N],
    len: usize,
}

impl<T, const N: usize> Stack<T, N> {
    pub fn new() -> Self {
        Stack {
            items: std::array::from_fn(|_| None),
            len: 0,
        }
    }

    pub fn push(&mut self, item: T) -> Result<(), StackError> {
        if self.len == N {
            tracing::debug!("push rejected, stack full at {}", N);
            return Err(StackError::Overflow { capacity: N });
        }

        self.items[self.len] = Some(item);
        self.len += 1;
        tracing::trace!("pushed, len = {}", self.len);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        if self.len == 0 {
            tracing::debug!("pop rejected, stack empty");
            return Err(StackError::Underflow);
        }

        self.len -= 1;
        tracing::trace!("popped, len = {}", self.len);
        self.items[self.len].take().ok_or(StackError::Underflow)
    }

    pub fn peek(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|top| self.items[top].as_ref())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<T, const N: usize> Default for Stack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack: Stack<&str> = Stack::new();
        stack.push("a").unwrap();
        stack.push("b").unwrap();
        stack.push("c").unwrap();

        assert_eq!(stack.pop(), Ok("c"));
        assert_eq!(stack.pop(), Ok("b"));
        assert_eq!(stack.pop(), Ok("a"));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty_is_underflow() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.pop(), Err(StackError::Underflow));
    }

    #[test]
    fn test_push_past_capacity_is_overflow() {
        let mut stack: Stack<usize> = Stack::new();
        for i in 0..DEFAULT_CAPACITY {
            stack.push(i).unwrap();
        }
        assert!(stack.is_full());
        assert_eq!(stack.push(100), Err(StackError::Overflow { capacity: 100 }));
        // The failed push leaves the stack untouched.
        assert_eq!(stack.len(), 100);
        assert_eq!(stack.peek(), Some(&99));
    }

    #[test]
    fn test_small_capacity() {
        let mut stack: Stack<char, 2> = Stack::new();
        assert_eq!(stack.capacity(), 2);
        stack.push('x').unwrap();
        stack.push('y').unwrap();
        assert_eq!(stack.push('z'), Err(StackError::Overflow { capacity: 2 }));
        assert_eq!(stack.pop(), Ok('y'));
        stack.push('z').unwrap();
        assert_eq!(stack.pop(), Ok('z'));
    }

    #[test]
    fn test_underflow_after_draining() {
        let mut stack: Stack<String, 4> = Stack::default();
        stack.push("only".to_string()).unwrap();
        assert_eq!(stack.pop().as_deref(), Ok("only"));
        assert_eq!(stack.pop(), Err(StackError::Underflow));
    }

    #[test]
    fn test_peek() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.peek(), None);
        stack.push(7).unwrap();
        assert_eq!(stack.peek(), Some(&7));
        assert_eq!(stack.len(), 1);
    }

    proptest! {
        #[test]
        fn test_pops_reverse_pushes(items in prop::collection::vec(any::<i64>(), 0..=DEFAULT_CAPACITY)) {
            let mut stack: Stack<i64> = Stack::new();
            for item in &items {
                stack.push(*item).unwrap();
            }

            let mut popped = Vec::new();
            while let Ok(item) = stack.pop() {
                popped.push(item);
            }

            popped.reverse();
            prop_assert_eq!(popped, items);
        }
    }
}
