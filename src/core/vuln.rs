use std::io::{self, BufRead, Write};

/// Capacity of the stack buffer in `vulnerable_function`.
pub const BUFFER_CAPACITY: usize = 64;

/// Reads one line from `input`, up to a newline or end of stream. The
/// newline is not kept. Read errors are swallowed; whatever arrived before
/// the error is returned.
pub fn read_line<R: BufRead>(input: &mut R) -> Vec<u8> {
    let mut line = Vec::new();
    let _ = input.read_until(b'\n', &mut line);
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    line
}

/// Copies every byte of `line` to `dst`, then appends a NUL sentinel.
///
/// # Safety
/// There is no bound check against the destination capacity. The challenge
/// calls this with a `BUFFER_CAPACITY`-byte stack buffer on purpose: input
/// longer than that overwrites whatever sits past the buffer, saved frame
/// state included. The silent overwrite is the exercise, not a bug to fix.
pub unsafe fn store_unchecked(line: &[u8], dst: *mut u8) {
    unsafe {
        std::ptr::copy_nonoverlapping(line.as_ptr(), dst, line.len());
        dst.add(line.len()).write(0);
    }
}

/// Prints the buffer contents up to the NUL sentinel, as read, with no
/// transformation.
pub fn echo<W: Write>(out: &mut W, buffer: &[u8]) {
    let len = memchr::memchr(0, buffer).unwrap_or(buffer.len());
    let _ = out.write_all(b"You entered: ");
    let _ = out.write_all(&buffer[..len]);
    let _ = out.write_all(b"\n");
}

/// Prompts for a line and stores it into a fixed stack buffer with no
/// length check.
pub fn vulnerable_function() {
    let mut buffer = [0u8; BUFFER_CAPACITY];

    print!("Enter your input: ");
    let _ = io::stdout().flush();

    let line = read_line(&mut io::stdin().lock());
    unsafe { store_unchecked(&line, buffer.as_mut_ptr()) };

    echo(&mut io::stdout(), &buffer);
}

mod test {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_read_line_strips_newline() {
        let mut input: &[u8] = b"hello\nrest";
        assert_eq!(read_line(&mut input), b"hello");
    }

    #[test]
    fn test_read_line_eof_without_newline() {
        let mut input: &[u8] = b"no newline";
        assert_eq!(read_line(&mut input), b"no newline");
    }

    #[test]
    fn test_read_line_empty() {
        let mut input: &[u8] = b"";
        assert!(read_line(&mut input).is_empty());
    }

    #[test]
    fn test_store_at_boundary_stays_in_buffer() {
        // arena twice the buffer size, poisoned so stray writes show up
        let mut arena = [0xAAu8; BUFFER_CAPACITY * 2];
        let line = vec![b'X'; BUFFER_CAPACITY - 1];

        unsafe { store_unchecked(&line, arena.as_mut_ptr()) };

        assert_eq!(&arena[..BUFFER_CAPACITY - 1], line.as_slice());
        assert_eq!(arena[BUFFER_CAPACITY - 1], 0);
        assert!(arena[BUFFER_CAPACITY..].iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn test_store_past_boundary_clobbers_adjacent_memory() {
        let mut arena = [0xAAu8; BUFFER_CAPACITY * 2];
        let line = vec![b'X'; BUFFER_CAPACITY + 16];

        unsafe { store_unchecked(&line, arena.as_mut_ptr()) };

        assert!(
            arena[BUFFER_CAPACITY..BUFFER_CAPACITY + 16]
                .iter()
                .all(|&b| b == b'X')
        );
        assert_eq!(arena[BUFFER_CAPACITY + 16], 0);
        assert!(arena[BUFFER_CAPACITY + 17..].iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn test_echo_stops_at_sentinel() {
        let mut buffer = [0u8; BUFFER_CAPACITY];
        buffer[..5].copy_from_slice(b"hello");

        let mut out = Vec::new();
        echo(&mut out, &buffer);

        assert_eq!(out, b"You entered: hello\n");
    }

    #[test]
    fn test_echo_without_sentinel_prints_whole_buffer() {
        let buffer = [b'A'; BUFFER_CAPACITY];

        let mut out = Vec::new();
        echo(&mut out, &buffer);

        assert_eq!(out.len(), b"You entered: \n".len() + BUFFER_CAPACITY);
    }
}
