//! Node.js binding, built with `--features node`.
//!
//! ```js
//! const { AhoCorasick } = require('./index.node');
//! const ac = new AhoCorasick(Buffer.from('he\0she\0hers\0'));
//! ac.matches(Buffer.from('ushers')); // [{ pattern: 1, start: 1, length: 3 }, ...]
//! ```

use std::rc::Rc;

use napi::{CallContext, Env, JsBuffer, JsObject, JsUndefined, JsUnknown, Property, Result, Status};
use napi_derive::{js_function, module_exports};

use crate::aho_corasick::{Automaton, Context};
use crate::alphabet::Alphabet;
use crate::buffer::{split_patterns, symbols};
use crate::error::Error;

#[cfg(all(
  any(windows, unix),
  target_arch = "x86_64",
  not(target_env = "musl"),
  not(debug_assertions)
))]
#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// The object wrapped by each JS `AhoCorasick` instance. Instances built
/// from another instance share its automaton but scan with their own
/// context.
struct AhoCorasick {
  automaton: Rc<Automaton>,
  context: Context,
}

impl AhoCorasick {
  fn new(automaton: Rc<Automaton>) -> Self {
    AhoCorasick { automaton, context: Context::new(false) }
  }
}

enum ArgType {
  Buffer(JsBuffer),
  Automaton(Rc<Automaton>),
}

fn to_js_error(e: Error) -> napi::Error {
  napi::Error::new(Status::InvalidArg, e.to_string())
}

/// JavaScript-callable constructor. Takes either a buffer of patterns or an
/// existing instance to share.
#[js_function(1)]
fn constructor(ctx: CallContext) -> Result<JsUndefined> {
  let mut this: JsObject = ctx.this_unchecked();

  let automaton = match get_arg(&ctx)? {
    ArgType::Automaton(automaton) => automaton,
    ArgType::Buffer(buffer) => {
      let patterns = split_patterns(&buffer.into_value()?);
      let automaton = Automaton::from_patterns(Alphabet::ascii(), patterns).map_err(to_js_error)?;
      Rc::new(automaton)
    }
  };

  ctx.env.wrap(&mut this, AhoCorasick::new(automaton))?;
  ctx.env.get_undefined()
}

/// Every match in the buffer as `{ pattern, start, length }`.
#[js_function(1)]
fn matches(ctx: CallContext) -> Result<JsObject> {
  let bytes = ctx.get::<JsBuffer>(0)?.into_value()?;
  let this: JsObject = ctx.this_unchecked();
  let aho: &mut AhoCorasick = ctx.env.unwrap(&this)?;

  let mut array = ctx.env.create_array()?;
  let found = aho.automaton.find_symbols(symbols(&bytes)).map_err(to_js_error)?;
  for (ix, m) in found.enumerate() {
    let m = m.map_err(to_js_error)?;
    let mut o = ctx.env.create_object()?;
    o.set_named_property("pattern", ctx.env.create_int64(m.pattern as i64)?)?;
    o.set_named_property("start", ctx.env.create_int64(m.start as i64)?)?;
    o.set_named_property("length", ctx.env.create_int64(m.len as i64)?)?;
    array.set_element(ix as u32, o)?;
  }
  Ok(array)
}

/// Indexes of the patterns seen, or null. State carries over between calls
/// until `reset()`, so a stream can be checked chunk by chunk.
#[js_function(1)]
fn suspicious(ctx: CallContext) -> Result<JsUnknown> {
  let bytes = ctx.get::<JsBuffer>(0)?.into_value()?;
  let this: JsObject = ctx.this_unchecked();
  let aho: &mut AhoCorasick = ctx.env.unwrap(&this)?;

  let automaton = Rc::clone(&aho.automaton);
  let found = automaton.execute_symbols(&mut aho.context, symbols(&bytes)).map_err(to_js_error)?;
  if found.is_empty() {
    return Ok(ctx.env.get_null()?.into_unknown());
  }

  let mut array = ctx.env.create_array()?;
  for (ix, pattern) in found.iter().enumerate() {
    array.set_element(ix as u32, ctx.env.create_int64(*pattern as i64)?)?;
  }
  Ok(array.into_unknown())
}

#[js_function(0)]
fn reset(ctx: CallContext) -> Result<JsUndefined> {
  let this: JsObject = ctx.this_unchecked();
  let aho: &mut AhoCorasick = ctx.env.unwrap(&this)?;
  aho.context.reset();
  ctx.env.get_undefined()
}

fn get_arg(ctx: &CallContext) -> Result<ArgType> {
  let object = ctx.get::<JsObject>(0)?;

  if object.is_buffer()? {
    return Ok(ArgType::Buffer(ctx.get::<JsBuffer>(0)?));
  }

  // throws if the object is not an AhoCorasick instance
  let aho: &mut AhoCorasick = ctx.env.unwrap(&object)?;
  Ok(ArgType::Automaton(Rc::clone(&aho.automaton)))
}

#[module_exports]
fn init(mut exports: JsObject, env: Env) -> Result<()> {
  let aho = env.define_class(
    "AhoCorasick",
    constructor,
    &[
      Property::new(&env, "matches")?.with_method(matches),
      Property::new(&env, "suspicious")?.with_method(suspicious),
      Property::new(&env, "reset")?.with_method(reset),
    ],
  )?;
  exports.set_named_property("AhoCorasick", aho)?;
  Ok(())
}
