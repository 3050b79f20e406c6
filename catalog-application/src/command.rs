/// 后台写操作命令
///
/// 一个命令描述一次针对商品目录的修改意图，例如
/// [`UpdateProductCommand`](crate::product::UpdateProductCommand) 或
/// [`RemoveAllCustomizationFieldsFromProductCommand`](crate::product::RemoveAllCustomizationFieldsFromProductCommand)。
/// 命令在构造时完成值对象校验，处理器只负责编排端口调用，不返回业务数据。
pub trait Command: Send + Sync + 'static {
    /// 稳定名称，形如 `product.update`，用于总线注册与日志字段
    const NAME: &'static str;
}
