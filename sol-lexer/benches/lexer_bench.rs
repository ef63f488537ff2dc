use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sol_lexer::{classify, classify_lines};

fn benchmark_classify_line(c: &mut Criterion) {
    let line = r#"    function transfer(address _to, uint256 _value) public returns (bool) { // move funds"#;

    c.bench_function("classify_line", |b| b.iter(|| classify(black_box(line))));
}

fn benchmark_classify_contract(c: &mut Criterion) {
    let source = r#"// SPDX-License-Identifier: MIT
pragma solidity ^0.8.0;

contract Counter {
    uint256 private count;
    address public owner;

    event CountChanged(uint256 newCount, address changedBy);

    constructor() {
        owner = msg.sender;
        count = 0;
    }

    function increment() public {
        count += 1;
        emit CountChanged(count, msg.sender);
    }

    function getCount() public view returns (uint256) {
        return count;
    }
}
"#;

    c.bench_function("classify_contract", |b| {
        b.iter(|| classify_lines(black_box(source)))
    });
}

criterion_group!(benches, benchmark_classify_line, benchmark_classify_contract);
criterion_main!(benches);
