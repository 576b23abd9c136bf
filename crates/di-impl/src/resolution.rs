//! 线程级解析链守卫

use locator_abstractions::ResolveContext;
use locator_common::{RegistryResult, TypeInfo};
use std::cell::RefCell;
use std::marker::PhantomData;

thread_local! {
    static RESOLVE_CONTEXT: RefCell<ResolveContext> = RefCell::new(ResolveContext::new());
}

/// 在当前线程的解析链上占位，析构时出栈
///
/// 提供者总是在调用 `resolve` 的线程上同步执行，所以线程局部的链足以覆盖
/// 一次完整的解析过程。
pub(crate) struct ResolutionGuard {
    _not_send: PhantomData<*const ()>,
}

impl ResolutionGuard {
    pub(crate) fn enter(type_info: &TypeInfo) -> RegistryResult<Self> {
        RESOLVE_CONTEXT.with(|context| context.borrow_mut().push_type(type_info))?;
        Ok(Self {
            _not_send: PhantomData,
        })
    }
}

impl Drop for ResolutionGuard {
    fn drop(&mut self) {
        RESOLVE_CONTEXT.with(|context| {
            context.borrow_mut().pop_type();
        });
    }
}
