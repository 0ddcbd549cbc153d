//! Pipeline for the harness commands.
//!
//! This binary is a test aid, not a product interface: compile errors are
//! printed and the process still exits 0, so downstream scripts can diff the
//! output. Only I/O failures produce a nonzero exit.

use brio_codegen::bytecode::disasm;
use brio_codegen::compiler::parse;
use brio_parser::NameTable;
use brio_parser::lexer::{self, TokenKind};
use std::io::Read;
use std::path::Path;

/// `brio tokens` - print the token stream.
pub fn dump_tokens(file: Option<&Path>) -> std::io::Result<()> {
    let source = read_source(file)?;
    let mut names = NameTable::new();
    let result = lexer::tokenize(&source, &mut names);

    if let Some(error) = result.error {
        println!("Error: \n{error}");
        return Ok(());
    }

    for tok in &result.tokens {
        print!("{}:\t{{ type=\"{}\"", tok.loc, tok.kind.name());
        match tok.kind {
            TokenKind::Integer => print!(", value={}", tok.integer_value()),
            TokenKind::Number => print!(", value={}", tok.number_value()),
            TokenKind::Str => print!(", value={:?}", result.str_literals[tok.str_index()]),
            TokenKind::Ident => print!(
                ", value=\"{}\"({})",
                names.name_of(tok.name_id()),
                tok.name_id().as_u32()
            ),
            _ => {}
        }
        println!(" }}");
    }

    Ok(())
}

/// `brio dump` - compile and print the disassembled module.
pub fn dump_bytecode(file: Option<&Path>) -> std::io::Result<()> {
    let source = read_source(file)?;
    let mut names = NameTable::new();
    let tokens = lexer::tokenize(&source, &mut names);

    match parse(tokens, &names) {
        Ok(module) => print!("{}", disasm::disassemble(&module, &names)),
        Err(error) => println!("Error: \n{error}"),
    }

    Ok(())
}

fn read_source(file: Option<&Path>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
