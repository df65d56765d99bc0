use multistack::*;

fn main() {
  let mut s = MultiStack::new(3, 10).unwrap();
  for v in 1..=5 {
    match s.insert(v, 1) {
      Ok(()) => println!("insert {} into stack 1", v),
      Err(e) => println!("insert {} into stack 1: {}", v, e),
    }
  }
  s.insert(1, 2).unwrap();
  s.insert(2, 2).unwrap();
  s.insert(1, 3).unwrap();

  for _ in 0..3 {
    println!("pop stack 2: {:?}", s.pop(2).unwrap());
  }
  for stack in 1..=3 {
    println!("peek stack {}: {:?}", stack, s.peek(stack).unwrap());
  }
}
