fn main() {
  runestone::main();
}
