// 統合テスト - ライブラリAPIとCLIバイナリ

mod test_library_api;
